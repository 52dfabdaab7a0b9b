// src/core/sanitize.rs

/// Trim every fragment, drop the blank ones, and concatenate the rest with no
/// separator. `<span> 食 <b>飯</b> </span>` reads as `食飯`.
pub fn join_stripped<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for frag in fragments {
        let t = frag.trim();
        if !t.is_empty() {
            out.push_str(t);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_trims() {
        assert_eq!(join_stripped(["  ", " 食 ", "\n", "飯\t"]), "食飯");
    }

    #[test]
    fn inner_spaces_survive() {
        assert_eq!(join_stripped([" sik6 faan6 "]), "sik6 faan6");
    }

    #[test]
    fn nothing_gives_empty() {
        assert_eq!(join_stripped(Vec::<&str>::new()), "");
    }
}
