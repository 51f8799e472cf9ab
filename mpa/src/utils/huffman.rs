//! Huffman symbol decoding for Layer III spectral data.
//!
//! Decode trees are built once from [`huffman_tables`](super::huffman_tables)
//! and walked one bit at a time.

use std::sync::LazyLock;

use anyhow::{Result, bail};

use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::HuffmanError;
use crate::utils::huffman_tables::{
    BIG_VALUE_TABLES, COUNT1_TABLE_A, COUNT1_TABLE_B, HuffmanTable,
};

/// Source of decoded Huffman symbols for the main data decoder.
///
/// [`StandardTables`] implements the ISO 11172-3 tables. Tests substitute
/// scripted sources to drive the spectral loop directly.
pub trait SymbolSource {
    /// Decodes one big-value pair using table `table_select`, including
    /// linbits extensions and sign bits.
    ///
    /// Table 0 yields `(0, 0)` without reading any bits.
    fn decode_pair(&self, reader: &mut BsIoSliceReader, table_select: u8) -> Result<(i32, i32)>;

    /// Decodes one count1 quadruple `[v, w, x, y]`, sign bits included.
    ///
    /// `table_b` selects count1 table B instead of table A.
    fn decode_quadruple(&self, reader: &mut BsIoSliceReader, table_b: bool) -> Result<[i32; 4]>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Empty,
    Node(u16),
    Leaf(u8),
}

#[derive(Debug)]
struct DecodeTree {
    nodes: Vec<[Link; 2]>,
}

impl DecodeTree {
    fn build(table: &HuffmanTable) -> Self {
        let mut nodes = vec![[Link::Empty; 2]];

        for (symbol, (&code, &len)) in table.codes.iter().zip(table.lengths).enumerate() {
            let mut node = 0;

            for depth in (0..len).rev() {
                let bit = ((u32::from(code) >> depth) & 1) as usize;

                if depth == 0 {
                    debug_assert_eq!(nodes[node][bit], Link::Empty, "code {code:#b} is not prefix-free");
                    nodes[node][bit] = Link::Leaf(symbol as u8);
                    break;
                }

                node = match nodes[node][bit] {
                    Link::Node(next) => next as usize,
                    link => {
                        debug_assert_eq!(link, Link::Empty, "code {code:#b} extends another code");
                        nodes.push([Link::Empty; 2]);
                        let next = nodes.len() - 1;
                        nodes[node][bit] = Link::Node(next as u16);
                        next
                    }
                };
            }
        }

        Self { nodes }
    }

    fn decode(&self, reader: &mut BsIoSliceReader, table: u8) -> Result<u8> {
        let position = reader.position()?;
        let mut node = 0;

        loop {
            let bit = reader.get()? as usize;

            match self.nodes[node][bit] {
                Link::Node(next) => node = next as usize,
                Link::Leaf(symbol) => return Ok(symbol),
                Link::Empty => bail!(HuffmanError::UnknownCode { table, position }),
            }
        }
    }
}

static BIG_VALUE_TREES: LazyLock<Vec<DecodeTree>> =
    LazyLock::new(|| BIG_VALUE_TABLES.iter().map(DecodeTree::build).collect());

static COUNT1_TREES: LazyLock<[DecodeTree; 2]> = LazyLock::new(|| {
    [
        DecodeTree::build(&COUNT1_TABLE_A),
        DecodeTree::build(&COUNT1_TABLE_B),
    ]
});

/// The standard Layer III Huffman tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardTables;

impl StandardTables {
    /// Applies the linbits extension and the sign bit to one decoded magnitude.
    fn read_value(reader: &mut BsIoSliceReader, magnitude: usize, linbits: u32) -> Result<i32> {
        let mut value = magnitude as i32;

        if linbits > 0 && magnitude == 15 {
            value += reader.read(linbits)? as i32;
        }

        if value != 0 && reader.get()? {
            value = -value;
        }

        Ok(value)
    }
}

impl SymbolSource for StandardTables {
    fn decode_pair(&self, reader: &mut BsIoSliceReader, table_select: u8) -> Result<(i32, i32)> {
        if table_select == 0 {
            return Ok((0, 0));
        }

        let index = table_select as usize;
        let Some(table) = BIG_VALUE_TABLES.get(index).filter(|t| !t.is_empty()) else {
            bail!(HuffmanError::InvalidTable(table_select));
        };

        let symbol = BIG_VALUE_TREES[index].decode(reader, table_select)? as usize;

        let x = Self::read_value(reader, symbol / table.ylen, table.linbits)?;
        let y = Self::read_value(reader, symbol % table.ylen, table.linbits)?;

        Ok((x, y))
    }

    fn decode_quadruple(&self, reader: &mut BsIoSliceReader, table_b: bool) -> Result<[i32; 4]> {
        let table = if table_b { 33 } else { 32 };
        let symbol = COUNT1_TREES[table_b as usize].decode(reader, table)?;

        let mut values = [0i32; 4];
        for (i, value) in values.iter_mut().enumerate() {
            let magnitude = ((symbol >> (3 - i)) & 1) as usize;
            *value = Self::read_value(reader, magnitude, 0)?;
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bitstream_io::BitPacker;
    use crate::utils::errors::BitstreamError;

    #[test]
    fn every_code_decodes_to_its_symbol() -> Result<()> {
        let tables = BIG_VALUE_TABLES
            .iter()
            .enumerate()
            .map(|(i, t)| (i as u8, t, &BIG_VALUE_TREES[i]))
            .chain([
                (32, &COUNT1_TABLE_A, &COUNT1_TREES[0]),
                (33, &COUNT1_TABLE_B, &COUNT1_TREES[1]),
            ]);

        for (number, table, tree) in tables.filter(|(_, t, _)| !t.is_empty()) {
            let mut packer = BitPacker::default();
            for (&code, &len) in table.codes.iter().zip(table.lengths) {
                packer.push(code as u32, len as u32);
            }

            let bytes = packer.bytes();
            let mut reader = BsIoSliceReader::from_slice(&bytes);
            for symbol in 0..table.codes.len() {
                assert_eq!(tree.decode(&mut reader, number)? as usize, symbol, "table {number}");
            }
            assert_eq!(reader.position()?, packer.bit_len());
        }

        Ok(())
    }

    #[test]
    fn table_zero_reads_nothing() -> Result<()> {
        let mut reader = BsIoSliceReader::from_slice(&[0xFF]);

        assert_eq!(StandardTables.decode_pair(&mut reader, 0)?, (0, 0));
        assert_eq!(reader.position()?, 0);

        Ok(())
    }

    #[test]
    fn undefined_tables_are_rejected() {
        for table in [4u8, 14, 32, 200] {
            let mut reader = BsIoSliceReader::from_slice(&[0xFF, 0xFF]);
            let err = StandardTables
                .decode_pair(&mut reader, table)
                .expect_err("table should be rejected");

            assert!(matches!(
                err.downcast_ref::<HuffmanError>(),
                Some(HuffmanError::InvalidTable(t)) if *t == table
            ));
        }
    }

    #[test]
    fn signs_follow_each_nonzero_value() -> Result<()> {
        // table 1: (1, 0) is "01", (1, 1) is "000"
        let bytes = BitPacker::default()
            .push_str("01 1")
            .push_str("000 0 1")
            .bytes();
        let mut reader = BsIoSliceReader::from_slice(&bytes);

        assert_eq!(StandardTables.decode_pair(&mut reader, 1)?, (-1, 0));
        assert_eq!(StandardTables.decode_pair(&mut reader, 1)?, (1, -1));
        assert_eq!(reader.position()?, 9);

        Ok(())
    }

    #[test]
    fn linbits_extend_escape_values() -> Result<()> {
        // table 17 shares the codes of table 16 with two linbits
        let table = &BIG_VALUE_TABLES[17];
        let symbol = 15 * 16 + 1;

        let bytes = BitPacker::default()
            .push(table.codes[symbol] as u32, table.lengths[symbol] as u32)
            .push(0b10, 2) // x linbits
            .push(1, 1) // x sign
            .push(0, 1) // y sign
            .bytes();
        let mut reader = BsIoSliceReader::from_slice(&bytes);

        assert_eq!(StandardTables.decode_pair(&mut reader, 17)?, (-17, 1));

        // table 15 has no linbits: 15 stays 15
        let table = &BIG_VALUE_TABLES[15];
        let symbol = 15 * 16 + 15;
        let bytes = BitPacker::default()
            .push(table.codes[symbol] as u32, table.lengths[symbol] as u32)
            .push_str("0 1")
            .bytes();
        let mut reader = BsIoSliceReader::from_slice(&bytes);

        assert_eq!(StandardTables.decode_pair(&mut reader, 15)?, (15, -15));

        Ok(())
    }

    #[test]
    fn quadruples() -> Result<()> {
        // table A: "1" is all zeros; table B: "0000" is all ones, then four signs
        let bytes = BitPacker::default()
            .push_str("1")
            .push_str("0000 1010")
            .push_str("1111")
            .bytes();
        let mut reader = BsIoSliceReader::from_slice(&bytes);

        assert_eq!(StandardTables.decode_quadruple(&mut reader, false)?, [0; 4]);
        assert_eq!(StandardTables.decode_quadruple(&mut reader, true)?, [-1, 1, -1, 1]);
        assert_eq!(StandardTables.decode_quadruple(&mut reader, true)?, [0; 4]);

        Ok(())
    }

    #[test]
    fn truncated_code_is_exhaustion() -> Result<()> {
        // three zero bits are a prefix of several table 24 codes
        let bytes = [0x00];
        let mut reader = BsIoSliceReader::from_slice(&bytes);
        reader.skip_n(5)?;

        let err = StandardTables
            .decode_pair(&mut reader, 24)
            .expect_err("code should run past the end");
        assert!(matches!(
            err.downcast_ref::<BitstreamError>(),
            Some(BitstreamError::Exhausted { .. })
        ));

        Ok(())
    }
}
