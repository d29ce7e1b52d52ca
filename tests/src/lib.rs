//! Integration tests exercising `selsort-core` together with the input
//! handling of `selsort-common`.

mod sorting;
