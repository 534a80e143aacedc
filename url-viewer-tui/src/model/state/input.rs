//! 单行输入框状态

/// 地址输入框
///
/// `cursor` 以字符计数，始终位于 `0..=value.chars().count()`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// 光标所在的字节偏移
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, ch: char) {
        let idx = self.byte_index();
        self.value.insert(idx, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index();
        self.value.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let idx = self.byte_index();
        self.value.remove(idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputField {
        let mut input = InputField::new();
        for ch in text.chars() {
            input.insert(ch);
        }
        input
    }

    #[test]
    fn typing_appends_at_cursor() {
        let input = typed("güzel.com");
        assert_eq!(input.value, "güzel.com");
        assert_eq!(input.cursor, 9);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut input = typed("exmple.com");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert('a');
        assert_eq!(input.value, "example.com");

        input.backspace();
        assert_eq!(input.value, "exmple.com");
        input.delete();
        assert_eq!(input.value, "exple.com");
    }

    #[test]
    fn multibyte_characters() {
        let mut input = typed("şçğ");
        input.move_left();
        input.backspace();
        assert_eq!(input.value, "şğ");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn edges_are_noops() {
        let mut input = typed("ab");
        input.delete();
        input.move_right();
        assert_eq!((input.value.as_str(), input.cursor), ("ab", 2));

        input.move_home();
        input.backspace();
        input.move_left();
        assert_eq!((input.value.as_str(), input.cursor), ("ab", 0));

        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }
}
