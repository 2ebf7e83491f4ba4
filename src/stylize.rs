/// Convert ASCII letters into small-caps look-alike glyphs.
/// Characters without a mapping are left unchanged.
pub fn stylize(text: &str) -> String {
    text.chars().map(small_cap).collect()
}

fn small_cap(ch: char) -> char {
    match ch.to_ascii_lowercase() {
        'a' => 'ᴀ',
        'b' => 'ʙ',
        'c' => 'ᴄ',
        'd' => 'ᴅ',
        'e' => 'ᴇ',
        'f' => 'ꜰ',
        'g' => 'ɢ',
        'h' => 'ʜ',
        'i' => 'ɪ',
        'j' => 'ᴊ',
        'k' => 'ᴋ',
        'l' => 'ʟ',
        'm' => 'ᴍ',
        'n' => 'ɴ',
        'o' => 'ᴏ',
        'p' => 'ᴘ',
        'q' => 'ǫ',
        'r' => 'ʀ',
        's' => 's',
        't' => 'ᴛ',
        'u' => 'ᴜ',
        'v' => 'ᴠ',
        'w' => 'ᴡ',
        'x' => 'x',
        'y' => 'ʏ',
        'z' => 'ᴢ',
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_maps_each_letter() {
        assert_eq!(stylize("Help"), "ʜᴇʟᴘ");
    }

    #[test]
    fn test_upper_and_lower_case_share_glyphs() {
        assert_eq!(
            stylize("abcdefghijklmnopqrstuvwxyz"),
            stylize("ABCDEFGHIJKLMNOPQRSTUVWXYZ")
        );
        assert_eq!(
            stylize("abcdefghijklmnopqrstuvwxyz"),
            "ᴀʙᴄᴅᴇꜰɢʜɪᴊᴋʟᴍɴᴏᴘǫʀsᴛᴜᴠᴡxʏᴢ"
        );
    }

    #[test]
    fn test_non_letters_pass_through() {
        let input = "0123456789 !?.,;:-_/'\"\n\t{}[]@#";
        assert_eq!(stylize(input), input);
        assert_eq!(stylize("héllo — ü"), "ʜéʟʟᴏ — ü");
    }

    #[test]
    fn test_s_and_x_stay_lowercase() {
        assert_eq!(stylize("SsXx"), "ssxx");
    }

    #[test]
    fn test_deterministic_and_empty() {
        assert_eq!(stylize(""), "");
        let text = "WELCOME {name}! 2 groups";
        assert_eq!(stylize(text), stylize(text));
        assert_eq!(stylize(text), "ᴡᴇʟᴄᴏᴍᴇ {ɴᴀᴍᴇ}! 2 ɢʀᴏᴜᴘs");
    }
}
