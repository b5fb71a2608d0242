//! Static glyph-width table for the PDF base font.
//!
//! Widths are in em units (relative to font size), taken from the Adobe
//! Helvetica AFM (advance width / 1000). The table covers ASCII 0x20..=0x7E
//! (95 printable characters); index = (char as usize) - 32. Anything outside
//! that range is measured with `average_char_width`.

use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// The standard PDF fonts the exporter can place text with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Standard Type 1 Helvetica; needs no embedding.
    Helvetica,
}

impl FontFamily {
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
        }
    }
}

/// Static character-width table for a font family.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    pub fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Greedy word-wrap to `max_width_pt`.
    ///
    /// Explicit newlines always start a new line. Runs of whitespace between
    /// words collapse to one space. A single word wider than the line is
    /// broken between characters.
    pub fn wrap(&self, text: &str, font_size_pt: f32, max_width_pt: f32) -> Vec<String> {
        let max_em = max_width_pt / font_size_pt;
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = String::new();
            let mut current_width = 0.0_f32;

            for word in paragraph.split_whitespace() {
                let word_w = self.measure_str(word);
                let space_w = if current.is_empty() { 0.0 } else { self.space_width };

                if current_width + space_w + word_w <= max_em {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(word);
                    current_width += space_w + word_w;
                    continue;
                }

                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }

                if word_w <= max_em {
                    current.push_str(word);
                    current_width = word_w;
                } else {
                    for c in word.chars() {
                        let w = self.char_width(c);
                        if !current.is_empty() && current_width + w > max_em {
                            lines.push(std::mem::take(&mut current));
                            current_width = 0.0;
                        }
                        current.push(c);
                        current_width += w;
                    }
                }
            }
            lines.push(current);
        }
        lines
    }
}

/// Helvetica (regular).
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    space_width: 0.278,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Helvetica => &HELVETICA_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helvetica() -> &'static FontMetricTable {
        get_metrics(&FontFamily::Helvetica)
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(helvetica().measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = helvetica().measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "Rust width should be ~2.056, got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = helvetica();
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_width_scales_with_font_size() {
        let metrics = helvetica();
        let text = "one two three four five six seven eight nine ten";
        let small = metrics.wrap(text, 10.0, 200.0);
        let large = metrics.wrap(text, 20.0, 200.0);
        assert!(large.len() > small.len(), "{small:?} vs {large:?}");
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = helvetica().wrap("Builds compilers.", 12.0, 170.0 * PT_PER_MM);
        assert_eq!(lines, vec!["Builds compilers."]);
    }

    #[test]
    fn test_wrap_long_text_respects_width() {
        let metrics = helvetica();
        let max_pt = 170.0 * PT_PER_MM;
        let text = "Architected a distributed caching layer using consistent hashing, \
                    reducing p99 latency by forty percent under peak load while keeping \
                    the operational footprint small and the on-call rotation quiet.";
        let lines = metrics.wrap(text, 12.0, max_pt);
        assert!(lines.len() >= 2, "expected wrapping, got {lines:?}");
        for line in &lines {
            assert!(metrics.measure_str(line) * 12.0 <= max_pt + 1e-3, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_honours_explicit_newlines() {
        let lines = helvetica().wrap("first\nsecond", 12.0, 500.0);
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_wrap_breaks_overlong_word() {
        let metrics = helvetica();
        let word = "W".repeat(40);
        let lines = metrics.wrap(&word, 12.0, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(metrics.measure_str(line) * 12.0 <= 100.0 + 1e-3);
        }
    }

    #[test]
    fn test_wrap_empty_text_is_single_empty_line() {
        assert_eq!(helvetica().wrap("", 12.0, 100.0), vec![String::new()]);
    }
}
