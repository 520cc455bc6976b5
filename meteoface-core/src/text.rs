//! Fixed-capacity text helpers
//!
//! Display buffers never grow. Writes that do not fit are cut at the last
//! whole character that does, and everything after the cut is discarded.

use core::fmt;

use heapless::String;

/// `fmt::Write` adapter that truncates instead of failing
pub struct Truncating<'a, const N: usize> {
    buf: &'a mut String<N>,
    truncated: bool,
}

impl<'a, const N: usize> Truncating<'a, N> {
    /// Clear `buf` and start writing into it
    pub fn new(buf: &'a mut String<N>) -> Self {
        buf.clear();
        Self {
            buf,
            truncated: false,
        }
    }

    /// Whether any output was cut off
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> fmt::Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for ch in s.chars() {
            if self.buf.push(ch).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

/// Replace the contents of `dst` with as much of `src` as fits
///
/// Returns true if `src` was cut.
pub fn copy_truncated<const N: usize>(dst: &mut String<N>, src: &str) -> bool {
    let mut writer = Truncating::new(dst);
    let _ = fmt::Write::write_str(&mut writer, src);
    writer.truncated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_copy_fits() {
        let mut buf = String::<8>::new();
        assert!(!copy_truncated(&mut buf, "Rain"));
        assert_eq!(buf.as_str(), "Rain");
    }

    #[test]
    fn test_copy_replaces_previous_contents() {
        let mut buf = String::<8>::new();
        copy_truncated(&mut buf, "Overcast");
        copy_truncated(&mut buf, "Fog");
        assert_eq!(buf.as_str(), "Fog");
    }

    #[test]
    fn test_copy_truncates() {
        let mut buf = String::<4>::new();
        assert!(copy_truncated(&mut buf, "Thunder"));
        assert_eq!(buf.as_str(), "Thun");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        // 'é' is two bytes and would straddle the bound
        let mut buf = String::<4>::new();
        assert!(copy_truncated(&mut buf, "abcé"));
        assert_eq!(buf.as_str(), "abc");
    }

    #[test]
    fn test_nothing_written_after_cut() {
        let mut buf = String::<4>::new();
        let mut writer = Truncating::new(&mut buf);
        write!(writer, "abcé{}", "d").unwrap();
        assert!(writer.truncated());
        assert_eq!(buf.as_str(), "abc");
    }

    #[test]
    fn test_formatted_integer_truncates() {
        let mut buf = String::<7>::new();
        let mut writer = Truncating::new(&mut buf);
        write!(writer, "{}C", i32::MIN).unwrap();
        assert_eq!(buf.as_str(), "-214748");
    }
}
