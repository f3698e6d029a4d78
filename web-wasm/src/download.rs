//! ダウンロード処理
//!
//! SVGテキストをBlob URLにし、一時的な `<a download>` をクリックして保存させる。

use gloo::file::{Blob, ObjectUrl};
use vectorizer_common::SVG_MIME;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// SVGテキストからBlob URLを作成
///
/// 戻り値をdropするとURLは破棄（revoke）される。
pub fn svg_object_url(svg: &str) -> ObjectUrl {
    let blob = Blob::new_with_options(svg, Some(SVG_MIME));
    ObjectUrl::from(blob)
}

/// 一時的なリンクを作ってクリックし、すぐに取り除く
pub fn trigger_download(url: &str, file_name: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("documentが取得できません")?;
    let body = document.body().ok_or("bodyがありません")?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("リンク作成失敗: {:?}", e))?
        .dyn_into()
        .map_err(|_| "HtmlAnchorElementに変換できません".to_string())?;
    link.set_href(url);
    link.set_download(file_name);

    body.append_child(&link)
        .map_err(|e| format!("リンク追加失敗: {:?}", e))?;
    link.click();
    body.remove_child(&link)
        .map_err(|e| format!("リンク削除失敗: {:?}", e))?;

    Ok(())
}
