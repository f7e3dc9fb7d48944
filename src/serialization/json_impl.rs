//! JSON serializer for the automaton and trace contracts.

use std::io::{Read, Write};

use log::debug;

use crate::automaton::Dfa;
use crate::simulation::MatchResult;

use super::{AutomatonSerializer, DfaDocument, SerializationError};

/// JSON serializer for human-readable format.
///
/// Output is pretty-printed so it can be inspected and diffed by hand.
pub struct JsonSerializer;

impl AutomatonSerializer for JsonSerializer {
    fn serialize_dfa<W: Write>(dfa: &Dfa, mut writer: W) -> Result<(), SerializationError> {
        let doc = DfaDocument::from(dfa);
        serde_json::to_writer_pretty(&mut writer, &doc)?;
        writer.flush()?;
        Ok(())
    }

    fn deserialize_dfa<R: Read>(reader: R) -> Result<Dfa, SerializationError> {
        let doc: DfaDocument = serde_json::from_reader(reader)?;
        debug!(
            "loaded DFA document for {:?} with {} states",
            doc.pattern,
            doc.states.len()
        );
        doc.into_dfa()
    }

    fn serialize_match_result<W: Write>(
        result: &MatchResult,
        mut writer: W,
    ) -> Result<(), SerializationError> {
        serde_json::to_writer_pretty(&mut writer, result)?;
        writer.flush()?;
        Ok(())
    }

    fn deserialize_match_result<R: Read>(reader: R) -> Result<MatchResult, SerializationError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
