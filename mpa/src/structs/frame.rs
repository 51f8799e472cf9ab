use crate::structs::header::FrameHeader;
use crate::structs::main_data::{GranuleChannel, MainData};
use crate::structs::side_info::{ChannelSideInfo, SideInfo};

/// A fully parsed Layer III frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Stream offset of the sync word.
    pub offset: u64,
    pub header: FrameHeader,
    /// CRC word read from the frame, when present.
    pub crc: Option<u16>,
    pub side_info: SideInfo,
    pub main_data: MainData,
}

impl Frame {
    pub fn channels(&self) -> usize {
        self.header.channels()
    }

    pub fn channel_side_info(&self, granule: usize, channel: usize) -> &ChannelSideInfo {
        self.side_info.channel(granule, channel)
    }

    pub fn granule(&self, granule: usize, channel: usize) -> &GranuleChannel {
        self.main_data.granule(granule, channel)
    }
}
