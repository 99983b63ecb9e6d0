//! The read-only Unicode character database.
//!
//! The bundled tables under `data/` are compiled into the binary and parsed
//! once, on first use. Tests build small datasets with [`DatasetBuilder`].
//!
//! # Table formats
//!
//! `names.txt`, one record per line:
//! - `# Unicode 14.0.0` on the first line gives the version; other `#` lines are comments
//! - `0041;latin capital letter a` - a single codepoint
//! - `0301;combining acute accent;m` - a combining codepoint
//! - `4E00..9FFF;cjk unified ideograph-` - a run whose names are the prefix
//!   followed by the lower-case hex value
//!
//! `blocks.txt`, one block per line: `0370..03FF; Greek and Coptic`.

use super::block::BlockRange;
use super::codepoint::{CodepointEntry, NameSpan, MAX_CODEPOINT};
use super::error::DatasetError;
use std::fmt::Write;
use std::sync::OnceLock;

const NAMES_TABLE: &str = include_str!("../../data/names.txt");
const BLOCKS_TABLE: &str = include_str!("../../data/blocks.txt");

const VERSION_PREFIX: &str = "# Unicode ";

/// Sorted codepoints, their names, and the block list.
#[derive(Debug, Clone)]
pub struct UnicodeData {
    names: String,
    entries: Vec<CodepointEntry>,
    blocks: Vec<BlockRange>,
    version: Option<String>,
}

impl UnicodeData {
    /// The dataset compiled into the binary.
    ///
    /// Parsed on first call and shared for the rest of the process.
    pub fn bundled() -> Result<&'static UnicodeData, DatasetError> {
        static BUNDLED: OnceLock<Result<UnicodeData, DatasetError>> = OnceLock::new();
        BUNDLED
            .get_or_init(|| UnicodeData::parse(NAMES_TABLE, BLOCKS_TABLE))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Start building a dataset by hand.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Parse the names and blocks tables.
    pub fn parse(names: &str, blocks: &str) -> Result<Self, DatasetError> {
        let mut builder = DatasetBuilder::default();
        let mut scratch = String::new();

        for (i, raw) in names.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }
            if let Some(version) = line.strip_prefix(VERSION_PREFIX) {
                if line_no == 1 {
                    builder.version = Some(version.trim().to_string());
                }
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            let malformed = |reason: &str| DatasetError::Malformed {
                table: "names",
                line: line_no,
                reason: reason.to_string(),
            };

            let mut fields = line.split(';');
            let value_field = fields.next().ok_or_else(|| malformed("missing value"))?;
            let name = fields
                .next()
                .filter(|n| !n.is_empty())
                .ok_or_else(|| malformed("missing name"))?;
            let combining = match fields.next() {
                None => false,
                Some("m") => true,
                Some(_) => return Err(malformed("unknown flag")),
            };

            if let Some((from, to)) = value_field.split_once("..") {
                let from = parse_hex(from).ok_or_else(|| malformed("bad range start"))?;
                let to = parse_hex(to).ok_or_else(|| malformed("bad range end"))?;
                if from > to {
                    return Err(malformed("inverted range"));
                }
                for value in from..=to {
                    scratch.clear();
                    // Writing to a String cannot fail.
                    let _ = write!(scratch, "{name}{value:04x}");
                    builder.push_codepoint(value, &scratch, combining)?;
                }
            } else {
                let value = parse_hex(value_field).ok_or_else(|| malformed("bad codepoint"))?;
                builder.push_codepoint(value, name, combining)?;
            }
        }

        for (i, raw) in blocks.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = |reason: &str| DatasetError::Malformed {
                table: "blocks",
                line: i + 1,
                reason: reason.to_string(),
            };
            let (range, name) = line.split_once(';').ok_or_else(|| malformed("missing name"))?;
            let (from, to) = range
                .trim()
                .split_once("..")
                .ok_or_else(|| malformed("missing range"))?;
            let from = parse_hex(from).ok_or_else(|| malformed("bad range start"))?;
            let to = parse_hex(to).ok_or_else(|| malformed("bad range end"))?;
            let block =
                BlockRange::new(from, to, name.trim()).ok_or_else(|| malformed("inverted range"))?;
            builder.push_block(block)?;
        }

        builder.build()
    }

    /// All codepoints, ascending by value.
    pub fn entries(&self) -> &[CodepointEntry] {
        &self.entries
    }

    /// Number of codepoints. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Official name of an entry.
    pub fn name(&self, entry: &CodepointEntry) -> &str {
        self.names.get(entry.name_span().range()).unwrap_or_default()
    }

    /// Official name of the entry at `index`, or "" when out of bounds.
    pub fn name_at(&self, index: usize) -> &str {
        self.entries
            .get(index)
            .map(|e| self.name(e))
            .unwrap_or_default()
    }

    /// The block list, ascending and non-overlapping.
    pub fn blocks(&self) -> &[BlockRange] {
        &self.blocks
    }

    /// Unicode version the tables were generated from, if known.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Incremental constructor for [`UnicodeData`].
///
/// Enforces ascending unique codepoints and ascending non-overlapping blocks.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    names: String,
    entries: Vec<CodepointEntry>,
    blocks: Vec<BlockRange>,
    version: Option<String>,
}

impl DatasetBuilder {
    /// Set the Unicode version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Append a codepoint. Values must be pushed in ascending order.
    pub fn push_codepoint(
        &mut self,
        value: u32,
        name: &str,
        combining: bool,
    ) -> Result<(), DatasetError> {
        if value > MAX_CODEPOINT {
            return Err(DatasetError::OutOfRange(value));
        }
        if let Some(previous) = self.entries.last().map(CodepointEntry::value) {
            if value <= previous {
                return Err(DatasetError::Unsorted { value, previous });
            }
        }

        let offset = self.names.len();
        let end = offset + name.len();
        if end > u32::MAX as usize {
            return Err(DatasetError::NameBufferOverflow(u32::MAX as usize));
        }
        self.names.push_str(name);
        let span = NameSpan {
            offset: offset as u32,
            len: name.len() as u32,
        };
        self.entries.push(CodepointEntry::new(value, span, combining));
        Ok(())
    }

    /// Builder-style [`push_codepoint`](Self::push_codepoint).
    pub fn codepoint(mut self, value: u32, name: &str, combining: bool) -> Result<Self, DatasetError> {
        self.push_codepoint(value, name, combining)?;
        Ok(self)
    }

    /// Append a block. Blocks must be pushed in ascending order.
    pub fn push_block(&mut self, block: BlockRange) -> Result<(), DatasetError> {
        if let Some(previous) = self.blocks.last() {
            if block.from() <= previous.to() {
                return Err(DatasetError::Unsorted {
                    value: block.from(),
                    previous: previous.to(),
                });
            }
        }
        self.blocks.push(block);
        Ok(())
    }

    /// Builder-style [`push_block`](Self::push_block).
    pub fn block(mut self, block: BlockRange) -> Result<Self, DatasetError> {
        self.push_block(block)?;
        Ok(self)
    }

    /// Finish. Fails if no codepoints were pushed.
    pub fn build(self) -> Result<UnicodeData, DatasetError> {
        if self.entries.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(UnicodeData {
            names: self.names,
            entries: self.entries,
            blocks: self.blocks,
            version: self.version,
        })
    }
}

fn parse_hex(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(text, 16).ok()
}
