//! Crate for driving iRobot Create and Roomba vacuums over the Open Interface (OI)
//! serial protocol. Not affiliated with iRobot Corporation.
//!
//! This crate is structured around two layers: a data-driven [packet
//! registry](packets) that knows the wire size and field layout of every OI
//! sensor packet, and typed [commands](commands) implementing
//! [`Encode`](encode::Encode) that validate their arguments and serialize to
//! exact command frames.
//!
//! Because manually framing commands and reading responses is a chore, the
//! [`Roomba`](connection::Roomba) session wraps a byte
//! [`Transport`](connection::Transport) and exposes one method per OI command,
//! handling the mutual exclusion, settle delays, and request/response
//! exchanges the hardware requires.

pub mod commands;
pub mod connection;
pub mod decode;
pub mod encode;
pub mod hexdump;
pub mod packets;
