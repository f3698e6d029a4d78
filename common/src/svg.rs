//! SVGラッパー生成モジュール
//!
//! PNGのバイト列をbase64のdata URIに変換し、固定サイズ(100x100)の
//! SVG文書の `<image>` 要素に埋め込む。トレース処理は行わない。

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// 受け付けるMIMEタイプ
pub const PNG_MIME: &str = "image/png";

/// 出力SVGのMIMEタイプ
pub const SVG_MIME: &str = "image/svg+xml";

const SVG_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 100 100">
  <image href=""#;

const SVG_TAIL: &str = r#"" x="0" y="0" width="100" height="100" />
</svg>"#;

/// 変換結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// 生成されたSVGテキスト
    pub svg: String,
    /// 元PNGのバイト数
    pub source_len: usize,
}

impl ConversionResult {
    /// SVGテキストのバイト数
    pub fn svg_len(&self) -> usize {
        self.svg.len()
    }

    /// 埋め込まれたdata URI
    ///
    /// `svg` が固定テンプレートの形をしていなければ `None`。
    pub fn data_uri(&self) -> Option<&str> {
        self.svg.strip_prefix(SVG_HEAD)?.strip_suffix(SVG_TAIL)
    }
}

/// バイト列をbase64 data URIに変換
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// data URIを固定テンプレートに埋め込む
pub fn wrap_data_uri(data_uri: &str) -> String {
    let mut svg = String::with_capacity(SVG_HEAD.len() + data_uri.len() + SVG_TAIL.len());
    svg.push_str(SVG_HEAD);
    svg.push_str(data_uri);
    svg.push_str(SVG_TAIL);
    svg
}

/// PNGバイト列をSVGラッパーに包む
pub fn package_png(bytes: &[u8]) -> ConversionResult {
    let uri = data_uri(PNG_MIME, bytes);
    log::debug!("packaged {} bytes into a {}-byte data URI", bytes.len(), uri.len());
    ConversionResult {
        svg: wrap_data_uri(&uri),
        source_len: bytes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    const EXPECTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 100 100">
  <image href="data:image/png;base64,AQID" x="0" y="0" width="100" height="100" />
</svg>"#;

    /// (要素名, 属性) の一覧を抽出
    fn elements(svg: &str) -> Vec<(String, Vec<(String, String)>)> {
        let mut reader = Reader::from_str(svg);
        let mut found = Vec::new();
        loop {
            match reader.read_event().expect("SVGが不正なXML") {
                Event::Start(e) | Event::Empty(e) => {
                    let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                    let attrs = e
                        .attributes()
                        .map(|a| {
                            let a = a.unwrap();
                            (
                                String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                                String::from_utf8(a.value.to_vec()).unwrap(),
                            )
                        })
                        .collect();
                    found.push((name, attrs));
                }
                Event::Eof => break,
                _ => {}
            }
        }
        found
    }

    fn attr<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_template_is_byte_identical() {
        let result = package_png(&[1, 2, 3]);
        assert_eq!(result.svg, EXPECTED);
        assert!(!result.svg.ends_with('\n'));
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(data_uri(PNG_MIME, b""), "data:image/png;base64,");
        assert_eq!(data_uri(PNG_MIME, b"hello"), "data:image/png;base64,aGVsbG8=");
        assert_eq!(data_uri(SVG_MIME, &[0xff]), "data:image/svg+xml;base64,/w==");
    }

    #[test]
    fn test_single_image_element_with_href() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let result = package_png(&bytes);
        let elements = elements(&result.svg);

        let images: Vec<_> = elements.iter().filter(|(n, _)| n == "image").collect();
        assert_eq!(images.len(), 1);
        assert_eq!(attr(&images[0].1, "href"), Some(data_uri(PNG_MIME, &bytes).as_str()));
        assert_eq!(attr(&images[0].1, "width"), Some("100"));
        assert_eq!(attr(&images[0].1, "height"), Some("100"));

        let svg = elements.iter().find(|(n, _)| n == "svg").expect("svg要素がない");
        assert_eq!(attr(&svg.1, "viewBox"), Some("0 0 100 100"));
    }

    #[test]
    fn test_view_box_independent_of_input_size() {
        for len in [0usize, 1, 64, 4096] {
            let result = package_png(&vec![0xAB; len]);
            assert!(result.svg.contains(r#"viewBox="0 0 100 100""#));
            assert_eq!(result.source_len, len);
        }
    }

    #[test]
    fn test_result_data_uri_accessor() {
        let result = package_png(b"\x89PNG");
        let expected = data_uri(PNG_MIME, b"\x89PNG");
        assert_eq!(result.data_uri(), Some(expected.as_str()));
        assert_eq!(result.svg_len(), result.svg.len());

        let empty = package_png(b"");
        assert_eq!(empty.data_uri(), Some("data:image/png;base64,"));
    }

    #[test]
    fn test_data_uri_of_foreign_svg() {
        // テンプレート以外のSVGテキストからは取り出さない
        for svg in ["<svg/>", "", "あ", SVG_HEAD, SVG_TAIL] {
            let result = ConversionResult {
                svg: svg.to_string(),
                source_len: 0,
            };
            assert_eq!(result.data_uri(), None, "svg = {:?}", svg);
        }

        // 先頭と末尾が重なるだけの短いテキストもパニックしない
        let overlapping = ConversionResult {
            svg: format!("{}{}", &SVG_HEAD[..SVG_HEAD.len() - 1], SVG_TAIL),
            source_len: 0,
        };
        assert_eq!(overlapping.data_uri(), None);
    }
}
