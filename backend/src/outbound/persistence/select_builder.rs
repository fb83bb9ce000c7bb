//! Structured assembly of parameterized SELECT statements.
//!
//! Listing queries in this layer vary their WHERE and HAVING clauses with
//! the filters a caller supplies. Rather than concatenating SQL text and
//! counting placeholders by hand at each call site, a statement is described
//! as a base SELECT plus a list of typed predicate clauses, each owning its
//! parameter value. [`SelectBuilder::build`] assembles the final statement
//! and is the only place positional parameters are numbered.

use sqlx::postgres::PgRow;

use super::pool::DbPool;

/// An owned value bound to one positional parameter.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SqlValue {
    /// Bound as `TEXT`.
    Text(String),
    /// Bound as `INT4`.
    Int(i32),
    /// Bound as `INT8`.
    BigInt(i64),
    /// Bound as `FLOAT8`.
    Float(f64),
}

/// Comparison operator joining a predicate's expression to its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Comparison {
    Equal,
    AtLeast,
    AtMost,
    Like,
}

impl Comparison {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::AtLeast => ">=",
            Self::AtMost => "<=",
            Self::Like => "LIKE",
        }
    }
}

/// A single filter condition contributed to a WHERE or HAVING clause.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Predicate {
    /// Comparison against a bound parameter.
    Bound {
        expression: &'static str,
        comparison: Comparison,
        value: SqlValue,
    },
    /// Condition that is complete as written and binds nothing.
    Fixed(&'static str),
}

impl Predicate {
    /// A comparison against an owned parameter value.
    pub(crate) const fn bound(
        expression: &'static str,
        comparison: Comparison,
        value: SqlValue,
    ) -> Self {
        Self::Bound {
            expression,
            comparison,
            value,
        }
    }

    /// A condition with no parameter, such as a comparison against
    /// `CURRENT_DATE`.
    pub(crate) const fn fixed(expression: &'static str) -> Self {
        Self::Fixed(expression)
    }
}

/// Incrementally describes one SELECT statement.
///
/// Clauses are emitted in SQL order regardless of the order builder methods
/// are called: WHERE predicates first (in insertion order), then GROUP BY,
/// HAVING, ORDER BY, and LIMIT. Parameters are numbered in that same order.
#[derive(Debug, Clone)]
pub(crate) struct SelectBuilder {
    base: &'static str,
    predicates: Vec<Predicate>,
    group_by: Option<&'static str>,
    having: Option<Predicate>,
    order_by: Option<&'static str>,
    limit: Option<i64>,
}

impl SelectBuilder {
    /// Start from a fixed SELECT/FROM/JOIN base.
    pub(crate) fn new(base: &'static str) -> Self {
        Self {
            base,
            predicates: Vec::new(),
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
        }
    }

    /// Append a predicate to the WHERE clause.
    pub(crate) fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Group result rows by the given expression.
    pub(crate) fn group_by(mut self, expression: &'static str) -> Self {
        self.group_by = Some(expression);
        self
    }

    /// Restrict grouped rows with an aggregate comparison.
    pub(crate) fn having(
        mut self,
        expression: &'static str,
        comparison: Comparison,
        value: SqlValue,
    ) -> Self {
        self.having = Some(Predicate::bound(expression, comparison, value));
        self
    }

    /// Order result rows by the given expression.
    pub(crate) fn order_by(mut self, expression: &'static str) -> Self {
        self.order_by = Some(expression);
        self
    }

    /// Cap the number of result rows. The cap is bound as the final
    /// positional parameter.
    pub(crate) fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Assemble the final statement and its ordered parameter list.
    pub(crate) fn build(self) -> PreparedSelect {
        let mut sql = String::from(self.base);
        let mut params: Vec<SqlValue> = Vec::new();

        let clauses: Vec<String> = self
            .predicates
            .into_iter()
            .map(|predicate| render_predicate(predicate, &mut params))
            .collect();
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if let Some(expression) = self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(expression);
        }

        if let Some(predicate) = self.having {
            let clause = render_predicate(predicate, &mut params);
            sql.push_str(" HAVING ");
            sql.push_str(&clause);
        }

        if let Some(expression) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(expression);
        }

        if let Some(limit) = self.limit {
            params.push(SqlValue::BigInt(limit));
            sql.push_str(&format!(" LIMIT ${}", params.len()));
        }

        PreparedSelect { sql, params }
    }
}

/// Render one predicate, appending its value (if any) to the parameter list
/// and referencing it by its 1-based position.
fn render_predicate(predicate: Predicate, params: &mut Vec<SqlValue>) -> String {
    match predicate {
        Predicate::Bound {
            expression,
            comparison,
            value,
        } => {
            params.push(value);
            format!("{expression} {} ${}", comparison.symbol(), params.len())
        }
        Predicate::Fixed(expression) => expression.to_owned(),
    }
}

/// A fully assembled statement ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PreparedSelect {
    sql: String,
    params: Vec<SqlValue>,
}

impl PreparedSelect {
    /// The assembled SQL text.
    pub(crate) fn sql(&self) -> &str {
        &self.sql
    }

    /// The parameter values in binding order.
    pub(crate) fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Execute against the pool, decoding every row as `T`.
    pub(crate) async fn fetch_all<T>(&self, pool: &DbPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<sqlx::Postgres, T>(&self.sql);
        for value in &self.params {
            query = match value {
                SqlValue::Text(text) => query.bind(text.clone()),
                SqlValue::Int(int) => query.bind(*int),
                SqlValue::BigInt(int) => query.bind(*int),
                SqlValue::Float(float) => query.bind(*float),
            };
        }
        query.fetch_all(pool.executor()).await
    }
}
