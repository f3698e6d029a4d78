//! 出力ファイル名の決定

const PNG_SUFFIX: &str = ".png";
const SVG_SUFFIX: &str = ".svg";

/// 入力ファイル名からダウンロード用のSVGファイル名を生成
///
/// 末尾の `.png`（大文字小文字を区別しない）を `.svg` に置き換える。
/// 拡張子が `.png` でない場合は `.svg` を付け足す。
/// 最初に見つかった `.png` ではなく末尾だけが対象で、
/// `a.png.backup.png` は `a.png.backup.svg`、`IMG.PNG` は `IMG.svg` になる。
pub fn svg_file_name(file_name: &str) -> String {
    let stem = strip_png_suffix(file_name).unwrap_or(file_name);
    format!("{stem}{SVG_SUFFIX}")
}

fn strip_png_suffix(file_name: &str) -> Option<&str> {
    let split = file_name.len().checked_sub(PNG_SUFFIX.len())?;
    if !file_name.is_char_boundary(split) {
        return None;
    }
    let (stem, suffix) = file_name.split_at(split);
    suffix.eq_ignore_ascii_case(PNG_SUFFIX).then_some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(svg_file_name("photo.png"), "photo.svg");
    }

    #[test]
    fn test_only_last_suffix_replaced() {
        assert_eq!(svg_file_name("archive.v2.png"), "archive.v2.svg");
        assert_eq!(svg_file_name("a.png.backup.png"), "a.png.backup.svg");
    }

    #[test]
    fn test_png_in_middle_is_kept() {
        assert_eq!(svg_file_name("photo.png.txt"), "photo.png.txt.svg");
        assert_eq!(svg_file_name("my.png-files.PNG"), "my.png-files.svg");
    }

    #[test]
    fn test_uppercase_suffix() {
        assert_eq!(svg_file_name("SCAN.PNG"), "SCAN.svg");
        assert_eq!(svg_file_name("scan.Png"), "scan.svg");
    }

    #[test]
    fn test_without_png_suffix() {
        assert_eq!(svg_file_name("image"), "image.svg");
        assert_eq!(svg_file_name("png"), "png.svg");
        assert_eq!(svg_file_name("photo.jpeg"), "photo.jpeg.svg");
    }

    #[test]
    fn test_bare_suffix() {
        assert_eq!(svg_file_name(".png"), ".svg");
    }

    #[test]
    fn test_multibyte_name() {
        assert_eq!(svg_file_name("写真.png"), "写真.svg");
        assert_eq!(svg_file_name("写真"), "写真.svg");
    }
}
