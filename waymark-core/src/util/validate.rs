pub const MAX_COMMENT_LEN: usize = 1000;
pub const MAX_CAPTION_LEN: usize = 200;

pub fn is_valid_comment(comment: &str) -> bool {
    comment.chars().count() <= MAX_COMMENT_LEN
}

pub fn is_valid_caption(caption: &str) -> bool {
    caption.chars().count() <= MAX_CAPTION_LEN
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
