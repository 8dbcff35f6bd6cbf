//! Pajek `.net` output.
//!
//! ```text
//! *Vertices 3
//! 1 "a"
//! 2 "b"
//! 3 "c"
//! *arcs
//! 1 2
//! 2 3
//! ```
//!
//! Labels are quoted verbatim. Embedded `"` characters are not escaped, so
//! labels containing quotes produce output other Pajek readers may reject.

use std::io::{self, Write};

use crate::graph::GraphSession;

pub const VERTICES_HEADER: &str = "*Vertices";
pub const ARCS_HEADER: &str = "*arcs";

/// Pajek format writer.
pub struct Pajek;

impl Pajek {
    /// Write the session as Pajek text.
    ///
    /// Vertices are listed by ascending id; edges in insertion order, lower id first.
    pub fn write<W: Write>(session: &GraphSession, mut writer: W) -> io::Result<()> {
        let mut vertices = session.registry().snapshot();
        vertices.sort_by_key(|&(_, id)| id);

        writeln!(writer, "{VERTICES_HEADER} {}", vertices.len())?;
        for (label, id) in vertices {
            writeln!(writer, "{id} \"{label}\"")?;
        }

        writeln!(writer, "{ARCS_HEADER}")?;
        for edge in session.edges().iter() {
            let (low, high) = edge.endpoints();
            writeln!(writer, "{low} {high}")?;
        }

        writer.flush()
    }

    /// Render the session into a string.
    pub fn to_string(session: &GraphSession) -> io::Result<String> {
        let mut buf = Vec::new();
        Self::write(session, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
