//! Error types for the treegen core library.
//!
//! Every fallible operation reports a [`TreeError`]. Precondition failures
//! (bad indices, shape parameters outside their domain, malformed edge sets)
//! and internal invariant violations share one enum so callers can match on a
//! single type and log a stable [`TreeErrorCode`].

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by tree construction, generation, merging and rooting.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TreeError {
    /// A tree must contain at least one vertex.
    #[error("a tree must contain at least one vertex")]
    EmptyTree,
    /// A vertex index fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a tree with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the tree the index was checked against.
        vertex_count: usize,
    },
    /// A generator shape parameter was outside its documented domain.
    #[error("{generator}: {parameter} must satisfy {constraint} (got {got})")]
    InvalidParameter {
        /// Generator that rejected the parameter.
        generator: &'static str,
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// Human-readable form of the violated constraint.
        constraint: &'static str,
        /// Value supplied by the caller.
        got: usize,
    },
    /// An edge joined a vertex to itself.
    #[error("edge joins vertex {vertex} to itself")]
    SelfLoop {
        /// The vertex carrying the loop.
        vertex: usize,
    },
    /// The edge set did not contain exactly `vertex_count - 1` edges.
    #[error("a tree on these vertices needs {expected} edges but {actual} were given")]
    EdgeCountMismatch {
        /// Required number of edges.
        expected: usize,
        /// Number of edges supplied.
        actual: usize,
    },
    /// An edge closed a cycle.
    #[error("edge ({left}, {right}) closes a cycle")]
    CycleDetected {
        /// First endpoint of the offending edge.
        left: usize,
        /// Second endpoint of the offending edge.
        right: usize,
    },
    /// The edge set did not connect every vertex.
    #[error("only {reached} of {vertex_count} vertices are connected")]
    Disconnected {
        /// Number of vertices reachable from the traversal root.
        reached: usize,
        /// Number of vertices in the tree.
        vertex_count: usize,
    },
    /// The Kruskal-style generator exhausted its configured draw budget.
    #[error("gave up after {limit} draws with {accepted} of {required} edges accepted")]
    AttemptLimitExceeded {
        /// Configured maximum number of draws.
        limit: usize,
        /// Edges accepted before the limit was hit.
        accepted: usize,
        /// Edges required for a spanning tree.
        required: usize,
    },
    /// An internal invariant of a generation algorithm was violated.
    #[error("{algorithm} invariant violated: {invariant}")]
    InvariantViolation {
        /// Algorithm whose invariant failed.
        algorithm: &'static str,
        /// Description of the violated invariant.
        invariant: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`TreeError`] variants.
    enum TreeErrorCode for TreeError {
        /// A tree must contain at least one vertex.
        EmptyTree => EmptyTree => "TREE_EMPTY",
        /// A vertex index fell outside the tree.
        VertexOutOfRange => VertexOutOfRange { .. } => "TREE_VERTEX_OUT_OF_RANGE",
        /// A generator shape parameter was outside its documented domain.
        InvalidParameter => InvalidParameter { .. } => "TREE_INVALID_PARAMETER",
        /// An edge joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "TREE_SELF_LOOP",
        /// The edge set had the wrong number of edges.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "TREE_EDGE_COUNT_MISMATCH",
        /// An edge closed a cycle.
        CycleDetected => CycleDetected { .. } => "TREE_CYCLE_DETECTED",
        /// The edge set did not connect every vertex.
        Disconnected => Disconnected { .. } => "TREE_DISCONNECTED",
        /// The Kruskal-style generator exhausted its draw budget.
        AttemptLimitExceeded => AttemptLimitExceeded { .. } => "TREE_ATTEMPT_LIMIT_EXCEEDED",
        /// An internal invariant of a generation algorithm was violated.
        InvariantViolation => InvariantViolation { .. } => "TREE_INVARIANT_VIOLATION",
    }
}

impl TreeError {
    /// Returns `true` for errors caused by caller input rather than by a
    /// defect in an algorithm.
    ///
    /// # Examples
    /// ```
    /// use treegen_core::TreeError;
    ///
    /// assert!(TreeError::EmptyTree.is_precondition());
    /// let defect = TreeError::InvariantViolation {
    ///     algorithm: "dyck",
    ///     invariant: "stack drained",
    /// };
    /// assert!(!defect.is_precondition());
    /// ```
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        !matches!(
            self,
            Self::InvariantViolation { .. } | Self::AttemptLimitExceeded { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TreeError>;
