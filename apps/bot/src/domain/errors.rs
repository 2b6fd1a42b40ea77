use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    EmptyGroup,
    NonContiguousGroup(Vec<u8>),
    UnorderedGroups,
    DuplicateCard(u8),
    CardOutOfRange(u8),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::EmptyGroup => write!(f, "empty card group"),
            DomainError::NonContiguousGroup(g) => {
                write!(f, "card group is not a contiguous ascending run: {g:?}")
            }
            DomainError::UnorderedGroups => write!(f, "card groups are not sorted and disjoint"),
            DomainError::DuplicateCard(v) => write!(f, "duplicate card value: {v}"),
            DomainError::CardOutOfRange(v) => write!(f, "card value out of range: {v}"),
        }
    }
}

impl Error for DomainError {}
