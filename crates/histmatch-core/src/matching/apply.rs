use ndarray::Zip;

use crate::channel::ChannelArray;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;

use super::mapping::MappingTable;

/// Remap every sample of `channel` through `mapping`.
///
/// Output has the same shape as the input; the input is left untouched.
pub fn apply_mapping(channel: &ChannelArray, mapping: &MappingTable) -> ChannelArray {
    if channel.len() >= PARALLEL_PIXEL_THRESHOLD {
        Zip::from(channel).par_map_collect(|&v| mapping.lookup(v))
    } else {
        channel.mapv(|v| mapping.lookup(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_elementwise() {
        let mut levels = [0u8; 256];
        levels[1] = 10;
        levels[2] = 20;
        let table = MappingTable::from_levels(levels);
        let data = ChannelArray::from_shape_vec((2, 2), vec![1, 2, 2, 3]).unwrap();
        let out = apply_mapping(&data, &table);
        assert_eq!(out.as_slice().unwrap(), &[10, 20, 20, 0]);
        assert_eq!(data.as_slice().unwrap(), &[1, 2, 2, 3]);
    }

    #[test]
    fn parallel_path_matches_sequential() {
        let data = ChannelArray::from_shape_fn((300, 300), |(r, c)| ((r * 7 + c) % 256) as u8);
        let table = MappingTable::from_levels(std::array::from_fn(|k| 255 - k as u8));
        let out = apply_mapping(&data, &table);
        let expected = data.mapv(|v| 255 - v);
        assert_eq!(out, expected);
    }
}
