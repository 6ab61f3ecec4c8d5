//! Classification rule tables, one module per dimension.
//!
//! Every table is an ordered cascade evaluated by
//! [`first_match`](crate::engine::first_match): the first rule whose
//! matcher accepts the normalized token decides the dimension. The order
//! within each table is semantically load-bearing — broader patterns are
//! placed after every more specific pattern they overlap with — and is
//! pinned by regression tests in the enum modules.

#[path = "rules/arch.rs"]
pub(crate) mod arch;
#[path = "rules/env.rs"]
pub(crate) mod env;
#[path = "rules/os.rs"]
pub(crate) mod os;
