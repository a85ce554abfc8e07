use super::constants::{GROUP_WIDTH, LINE_WIDTH, PREVIEW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub preview_len: usize,
    pub line_width: usize,
    pub group_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            preview_len: PREVIEW_LEN,
            line_width: LINE_WIDTH,
            group_width: GROUP_WIDTH,
        }
    }
}

/// Cuts `hex` to `preview_len` characters, wraps it every `line_width`
/// characters and separates every `group_width` characters with a space.
pub fn format_preview(hex: &str, layout: Layout) -> Vec<String> {
    let preview: Vec<char> = hex.chars().take(layout.preview_len).collect();

    preview
        .chunks(layout.line_width.max(1))
        .map(|line| {
            line.chunks(layout.group_width.max(1))
                .map(|group| group.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
