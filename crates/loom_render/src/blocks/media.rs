//! Audio and video blocks
//!
//! Audio fields: `src` (required), `title`, `autoplay`, `loop`, `controls`.
//! Video fields: `src` (required), `poster`, `caption`, `autoplay`, `loop`,
//! `muted`, `controls`.
//!
//! Browsers refuse unmuted autoplay, so an autoplaying video is always muted.

use loom_core::{BlockData, DataExt};

use super::rich_text::safe_url;
use crate::context::RenderContext;
use crate::markup::{el, Element, Node};
use crate::registry::{BlockRenderer, BlockView};

/// Playback flags shared by audio and video
fn playback(element: Element, data: &BlockData) -> Element {
    element
        .flag("controls", data.bool_field("controls").unwrap_or(true))
        .flag("autoplay", data.bool_field("autoplay").unwrap_or(false))
        .flag("loop", data.bool_field("loop").unwrap_or(false))
        .attr("preload", "metadata")
}

pub struct AudioBlock;

impl BlockRenderer for AudioBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(src) = block.data.str_field("src") else {
            return block.invalid_field(cx, "src");
        };

        let audio = playback(el("audio").attr("src", safe_url(src)), block.data);
        let figure = el("figure").data("audio", "");

        match block.data.str_field("title") {
            Some(title) => figure
                .child(el("figcaption").text(title))
                .child(audio)
                .into(),
            None => figure.child(audio).into(),
        }
    }
}

pub struct VideoBlock;

impl BlockRenderer for VideoBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(src) = block.data.str_field("src") else {
            return block.invalid_field(cx, "src");
        };

        let autoplay = block.data.bool_field("autoplay").unwrap_or(false);
        let muted = autoplay || block.data.bool_field("muted").unwrap_or(false);

        let video = playback(el("video").attr("src", safe_url(src)), block.data)
            .flag("muted", muted)
            .flag("playsinline", true)
            .attr_opt("poster", block.data.str_field("poster").map(safe_url));

        let figure = el("figure").data("video", "").child(video);

        match block.data.str_field("caption") {
            Some(caption) => figure.child(el("figcaption").text(caption)).into(),
            None => figure.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::test_support::render;
    use serde_json::json;

    #[test]
    fn test_audio() {
        let (node, diags) = render(&AudioBlock, json!({ "src": "/ep1.mp3", "title": "Episode 1" }));
        assert!(diags.is_empty());
        assert_eq!(
            node.to_html(),
            r#"<figure data-audio><figcaption>Episode 1</figcaption><audio src="/ep1.mp3" controls preload="metadata"></audio></figure>"#
        );
    }

    #[test]
    fn test_video_autoplay_forces_muted() {
        let (node, _) = render(
            &VideoBlock,
            json!({ "src": "/intro.mp4", "autoplay": true, "muted": false, "controls": false }),
        );
        let html = node.to_html();
        assert!(html.contains(" autoplay"));
        assert!(html.contains(" muted"));
        assert!(!html.contains(" controls"));
    }

    #[test]
    fn test_missing_src() {
        let (node, diags) = render(&VideoBlock, json!({ "poster": "/p.jpg" }));
        assert!(node.is_empty());
        assert_eq!(diags.len(), 1);

        let (node, diags) = render(&AudioBlock, json!({}));
        assert!(node.is_empty());
        assert_eq!(diags.len(), 1);
    }
}
