//! Primitive types shared by the reelspin crates: symbol pools, arrangements,
//! round results, machine configuration and the error taxonomy.

pub mod slot;
