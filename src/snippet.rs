/// Extract a window of `radius` characters on each side of the byte span
/// `[start, end)`. Operates on char boundaries so multi-byte input never
/// splits a code point.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let mut window_start = start;
    let mut taken = 0;
    for (i, _) in text[..start].char_indices().rev() {
        window_start = i;
        taken += 1;
        if taken >= radius {
            break;
        }
    }

    let mut window_end = end;
    taken = 0;
    for (i, ch) in text[end..].char_indices() {
        window_end = end + i + ch.len_utf8();
        taken += 1;
        if taken >= radius {
            break;
        }
    }

    text[window_start..window_end].trim().to_string()
}
