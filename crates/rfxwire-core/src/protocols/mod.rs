//! Per-packet-type codecs.
//!
//! Each packet type follows a layered structure:
//! - `layout`: byte offsets and frame size (source of truth)
//! - `types`: byte-enum tables for subtype, command or response bytes
//! - `parser`: decode/encode through `common::FrameReader` (no direct indexing on decode)
//! - `convert`: semantic value mapping and outgoing command construction
//!
//! Adding a packet type means adding a module with that shape, a variant to
//! `Message`, and a `PacketCodec` registered in the dispatch registry.
//! Codecs are pure and contain no I/O.

pub(crate) mod common;
pub mod header;
pub mod lighting1;
pub mod lighting3;
pub mod transmitter;
