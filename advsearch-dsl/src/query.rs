use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Occurrence slot of a clause inside a [`BoolQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolClause {
    Must,
    Should,
    MustNot,
    Filter,
}

impl BoolClause {
    pub const ALL: [BoolClause; 4] = [Self::Must, Self::Should, Self::MustNot, Self::Filter];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Must => "must",
            Self::Should => "should",
            Self::MustNot => "must_not",
            Self::Filter => "filter",
        }
    }
}

/// Comparison of a `range` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl RangeOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }
}

/// A query fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Bool(BoolQuery),
    Nested(NestedQuery),
    Term { field: String, value: Value },
    Range { field: String, op: RangeOp, value: Value },
    Exists { field: String },
    QueryString { query: String, fields: Vec<String> },
    MatchAll,
    /// A fragment supplied by the caller, emitted verbatim.
    Raw(Value),
}

impl Query {
    pub fn term(field: impl Into<String>, value: Value) -> Self {
        Self::Term {
            field: field.into(),
            value,
        }
    }

    pub fn range(field: impl Into<String>, op: RangeOp, value: Value) -> Self {
        Self::Range {
            field: field.into(),
            op,
            value,
        }
    }

    pub fn exists(field: impl Into<String>) -> Self {
        Self::Exists { field: field.into() }
    }

    pub fn query_string(query: impl Into<String>, fields: Vec<String>) -> Self {
        Self::QueryString {
            query: query.into(),
            fields,
        }
    }

    pub fn nested(path: impl Into<String>, query: Query) -> Self {
        Self::Nested(NestedQuery::new(path, query))
    }

    /// Renders the fragment in the engine's query JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => b.to_json(),
            Self::Nested(n) => n.to_json(),
            Self::Term { field, value } => json!({ "term": { field.as_str(): value } }),
            Self::Range { field, op, value } => {
                json!({ "range": { field.as_str(): { op.as_str(): value } } })
            }
            Self::Exists { field } => json!({ "exists": { "field": field } }),
            Self::QueryString { query, fields } => {
                json!({ "query_string": { "query": query, "fields": fields } })
            }
            Self::MatchAll => json!({ "match_all": {} }),
            Self::Raw(value) => value.clone(),
        }
    }
}

impl From<BoolQuery> for Query {
    fn from(b: BoolQuery) -> Self {
        Self::Bool(b)
    }
}

impl From<NestedQuery> for Query {
    fn from(n: NestedQuery) -> Self {
        Self::Nested(n)
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Compound query combining child fragments by occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    must: Vec<Query>,
    should: Vec<Query>,
    must_not: Vec<Query>,
    filter: Vec<Query>,
}

impl BoolQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause (mutating).
    pub fn add(&mut self, query: Query, clause: BoolClause) -> &mut Self {
        self.slot_mut(clause).push(query);
        self
    }

    /// Add a clause (builder pattern).
    #[must_use]
    pub fn with(mut self, query: Query, clause: BoolClause) -> Self {
        self.add(query, clause);
        self
    }

    /// Clauses registered under `clause`, in insertion order.
    pub fn clauses(&self, clause: BoolClause) -> &[Query] {
        match clause {
            BoolClause::Must => &self.must,
            BoolClause::Should => &self.should,
            BoolClause::MustNot => &self.must_not,
            BoolClause::Filter => &self.filter,
        }
    }

    pub fn is_empty(&self) -> bool {
        BoolClause::ALL.iter().all(|c| self.clauses(*c).is_empty())
    }

    pub fn len(&self) -> usize {
        BoolClause::ALL.iter().map(|c| self.clauses(*c).len()).sum()
    }

    fn slot_mut(&mut self, clause: BoolClause) -> &mut Vec<Query> {
        match clause {
            BoolClause::Must => &mut self.must,
            BoolClause::Should => &mut self.should,
            BoolClause::MustNot => &mut self.must_not,
            BoolClause::Filter => &mut self.filter,
        }
    }

    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        for clause in BoolClause::ALL {
            let queries = self.clauses(clause);
            if !queries.is_empty() {
                body.insert(
                    clause.as_str().to_string(),
                    Value::Array(queries.iter().map(Query::to_json).collect()),
                );
            }
        }
        json!({ "bool": body })
    }
}

/// Scopes a fragment to the objects of a nested mapping path.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedQuery {
    pub path: String,
    pub query: Box<Query>,
}

impl NestedQuery {
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        Self {
            path: path.into(),
            query: Box::new(query),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "nested": { "path": self.path, "query": self.query.to_json() } })
    }
}
