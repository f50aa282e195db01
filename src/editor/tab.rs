/// Result of typing a Tab into the body editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TabInsert {
    pub value: String,
    /// Caret position after the inserted tab (UTF-16 code units).
    pub cursor: u32,
}

/// Replace the selection `[start, end)` with `\t`.
///
/// Positions are DOM selection offsets (UTF-16 code units); a collapsed
/// selection is a plain insert at the caret.
pub(crate) fn insert_tab(value: &str, start: u32, end: u32) -> TabInsert {
    let (start, end) = (start.min(end), start.max(end));
    let start_b = utf16_to_byte_idx(value, start);
    let end_b = utf16_to_byte_idx(value, end);

    let mut out = String::with_capacity(value.len() + 1);
    out.push_str(&value[..start_b]);
    out.push('\t');
    out.push_str(&value[end_b..]);

    TabInsert {
        value: out,
        cursor: byte_idx_to_utf16(value, start_b) + 1,
    }
}

pub(crate) fn utf16_to_byte_idx(s: &str, pos_utf16: u32) -> usize {
    if pos_utf16 == 0 {
        return 0;
    }
    let mut acc: u32 = 0;
    for (i, ch) in s.char_indices() {
        let w = ch.len_utf16() as u32;
        if acc + w > pos_utf16 {
            return i;
        }
        acc += w;
        if acc == pos_utf16 {
            return i + ch.len_utf8();
        }
    }
    s.len()
}

pub(crate) fn byte_idx_to_utf16(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx.min(s.len())].encode_utf16().count() as u32
}
