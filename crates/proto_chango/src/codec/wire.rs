//! Wire message shapes.
//!
//! Tag numbers are a fixed contract shared by encoder and decoder and must
//! not change:
//!
//! | message  | tag | field        | kind                     |
//! |----------|-----|--------------|--------------------------|
//! | Node     | 1   | `id`         | string                   |
//! | Node     | 2   | `nodes`      | repeated Node            |
//! | DateTime | 1   | `value`      | string                   |
//! | Object   | 3   | `node`       | Node                     |
//! | Object   | 4   | `name`       | string                   |
//! | Object   | 5   | `created_at` | string                   |
//! | Object   | 6   | `updated_at` | DateTime                 |

/// `Node` message.
#[derive(Clone, PartialEq, prost::Message)]
pub struct NodeMessage {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, repeated, tag = "2")]
    pub nodes: Vec<NodeMessage>,
}

/// `DateTime` message.
#[derive(Clone, PartialEq, prost::Message)]
pub struct DateTimeMessage {
    #[prost(string, tag = "1")]
    pub value: String,
}

/// `Object` message carrying one record.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ObjectMessage {
    #[prost(message, optional, tag = "3")]
    pub node: Option<NodeMessage>,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(string, tag = "5")]
    pub created_at: String,
    #[prost(message, optional, tag = "6")]
    pub updated_at: Option<DateTimeMessage>,
}
