use crate::options::RepackMode;

/// Reassign `columns` (active lanes, left to right) so that none repeat
pub fn repack_columns(columns: &mut [usize], mode: RepackMode) {
    let mut next_free = 0;
    for column in columns.iter_mut() {
        match mode {
            RepackMode::Compact => {
                *column = next_free;
                next_free += 1;
            }
            RepackMode::Monotonic => {
                if *column <= next_free {
                    *column = next_free;
                    next_free += 1;
                } else {
                    next_free = *column + 1;
                }
            }
        }
    }
}
