use arcviz_model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Empty element: the description declares no users or systems")]
    EmptyElement,

    #[error("Empty graph")]
    EmptyGraph,

    #[error("Empty or un-initialized graph")]
    Uninitialized,

    #[error("Invalid subject in relation: {0}")]
    UnresolvedSubject(String),

    #[error("Invalid object in relation: {0}")]
    UnresolvedObject(String),
}
