//! Transliteration backed by the `pinyin` crate's dictionary

use super::{Romanization, TransliterationError, Transliterator};
use pinyin::ToPinyin;

/// Looks characters up in the built-in pinyin dictionary
///
/// Heteronyms resolve to their most common reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinTransliterator;

impl Transliterator for PinyinTransliterator {
    fn romanize(&self, ch: char) -> Result<Option<Romanization>, TransliterationError> {
        Ok(ch
            .to_pinyin()
            .map(|py| Romanization::new(py.plain(), py.with_tone_num_end())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_characters() {
        let t = PinyinTransliterator;

        let chun = t.romanize('春').unwrap().unwrap();
        assert_eq!(chun.plain, "chun");
        assert_eq!(chun.numbered, "chun1");

        let xia = t.romanize('夏').unwrap().unwrap();
        assert_eq!(xia.plain, "xia");
        assert_eq!(xia.numbered, "xia4");
    }

    #[test]
    fn umlaut_is_spelled_v() {
        let t = PinyinTransliterator;

        let nv = t.romanize('女').unwrap().unwrap();
        assert_eq!(nv.plain, "nv");
        assert_eq!(nv.numbered, "nv3");

        let lv = t.romanize('旅').unwrap().unwrap();
        assert_eq!(lv.plain, "lv");
        assert_eq!(lv.numbered, "lv3");
    }

    #[test]
    fn non_han_characters_are_unknown() {
        let t = PinyinTransliterator;
        assert_eq!(t.romanize('a').unwrap(), None);
        assert_eq!(t.romanize('!').unwrap(), None);
    }
}
