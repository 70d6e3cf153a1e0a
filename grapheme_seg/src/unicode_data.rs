//! Builds the bundled [`PropertyTable`] from the ICU4X compiled Unicode data.

use crate::property::{PropertyGroup, PropertyRange, PropertyTable};
use icu_properties::{
    CodePointMapData, CodePointSetData,
    props::{ExtendedPictographic, GraphemeClusterBreak},
};
use std::ops::RangeInclusive;

/// Maps a break value to a group, or `None` when it behaves as `Other`.
fn to_group(value: GraphemeClusterBreak) -> Option<PropertyGroup> {
    let group = match value {
        GraphemeClusterBreak::CR => PropertyGroup::CR,
        GraphemeClusterBreak::LF => PropertyGroup::LF,
        GraphemeClusterBreak::Control => PropertyGroup::Control,
        GraphemeClusterBreak::Extend | GraphemeClusterBreak::EModifier => PropertyGroup::Extend,
        GraphemeClusterBreak::ZWJ => PropertyGroup::ZWJ,
        GraphemeClusterBreak::RegionalIndicator => PropertyGroup::RegionalIndicator,
        GraphemeClusterBreak::Prepend => PropertyGroup::Prepend,
        GraphemeClusterBreak::SpacingMark => PropertyGroup::SpacingMark,
        GraphemeClusterBreak::L => PropertyGroup::L,
        GraphemeClusterBreak::V => PropertyGroup::V,
        GraphemeClusterBreak::T => PropertyGroup::T,
        GraphemeClusterBreak::LV => PropertyGroup::LV,
        GraphemeClusterBreak::LVT => PropertyGroup::LVT,
        // `Other` and the obsolete E_Base, E_Base_GAZ and Glue_After_Zwj.
        _ => return None,
    };
    Some(group)
}

/// Appends a range, merging it into the last one when they touch and share a
/// group.
fn push(ranges: &mut Vec<PropertyRange>, start: u32, end: u32, group: PropertyGroup) {
    if let Some(last) = ranges.last_mut() {
        if last.group == group && last.end + 1 == start {
            last.end = end;
            return;
        }
    }
    ranges.push(PropertyRange::new(start, end, group));
}

/// Pushes the parts of `start..=end` covered by the pictographic ranges.
fn push_pictographic(
    ranges: &mut Vec<PropertyRange>,
    pictographic: &[RangeInclusive<u32>],
    start: u32,
    end: u32,
) {
    let first = pictographic.partition_point(|p| *p.end() < start);
    for p in pictographic[first..].iter().take_while(|p| *p.start() <= end) {
        let from = start.max(*p.start());
        let to = end.min(*p.end());
        push(ranges, from, to, PropertyGroup::ExtendedPictographic);
    }
}

pub(crate) fn load() -> PropertyTable {
    let pictographic: Vec<RangeInclusive<u32>> = CodePointSetData::new::<ExtendedPictographic>()
        .iter_ranges()
        .collect();

    let mut ranges = Vec::new();
    for range in CodePointMapData::<GraphemeClusterBreak>::new().iter_ranges() {
        let (start, end) = (*range.range.start(), *range.range.end());
        match to_group(range.value) {
            Some(group) => push(&mut ranges, start, end, group),
            None => push_pictographic(&mut ranges, &pictographic, start, end),
        }
    }

    tracing::debug!(
        message = "loaded unicode grapheme property table",
        ranges = ranges.len()
    );
    PropertyTable::from_ranges_unchecked(ranges)
}
