//! Frame context handed to an app on every tick
//!
//! Drawing calls are recorded as `RenderInstruction`s; the host drains the
//! queue after the app returns and rasterises it however it likes.

use crate::assets::{Assets, ImageId};
use crate::types::{FrameInput, Key, Vec2};

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    Image {
        image: ImageId,
        position: Vec2,
    },
    Text {
        text: String,
        position: Vec2,
        font_size: f32,
        color: u32,
    },
}

/// Per-tick view of the host: input snapshot, icon sizes and a render queue
pub struct Frame<'a> {
    input: &'a FrameInput,
    assets: &'a Assets,
    render_queue: Vec<RenderInstruction>,
}

impl<'a> Frame<'a> {
    pub fn new(input: &'a FrameInput, assets: &'a Assets) -> Self {
        Self {
            input,
            assets,
            render_queue: Vec::new(),
        }
    }

    pub fn draw_image(&mut self, position: Vec2, image: ImageId) {
        self.render_queue
            .push(RenderInstruction::Image { image, position });
    }

    pub fn draw_text(&mut self, position: Vec2, text: &str, font_size: f32, color: u32) {
        self.render_queue.push(RenderInstruction::Text {
            text: text.to_string(),
            position,
            font_size,
            color,
        });
    }

    pub fn mouse_pos(&self) -> Vec2 {
        self.input.mouse_pos
    }

    pub fn click(&self) -> bool {
        self.input.click
    }

    pub fn jpressed(&self, key: Key) -> bool {
        self.input.jpressed(key)
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.input.pressed(key)
    }

    pub fn typed_text(&self) -> &str {
        &self.input.typed_text
    }

    /// Size of a registered image; unknown handles measure as zero
    pub fn image_size(&self, image: ImageId) -> Vec2 {
        self.assets.image_size(image).unwrap_or(Vec2::ZERO)
    }

    pub fn render_queue(&self) -> &[RenderInstruction] {
        &self.render_queue
    }

    pub fn into_render_queue(self) -> Vec<RenderInstruction> {
        self.render_queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::CROSS_ICON;

    #[test]
    fn test_draw_calls_are_queued_in_order() {
        let input = FrameInput::new();
        let assets = Assets::watch_default();
        let cross = assets.icon(CROSS_ICON).unwrap();
        let mut frame = Frame::new(&input, &assets);

        frame.draw_image(Vec2::ZERO, cross);
        assert_eq!(frame.render_queue().len(), 1);
        frame.draw_text(Vec2::new(0.0, 16.0), "hi", 7.0, 0xFFFFFF);

        let queue = frame.into_render_queue();
        assert_eq!(queue.len(), 2);
        assert!(matches!(queue[0], RenderInstruction::Image { image, .. } if image == cross));
        assert!(matches!(&queue[1], RenderInstruction::Text { text, .. } if text == "hi"));
    }

    #[test]
    fn test_input_passthrough() {
        let input = FrameInput::new()
            .with_typed("abc")
            .with_key(Key::Enter)
            .with_click()
            .with_mouse(Vec2::new(2.0, 3.0));
        let assets = Assets::new();
        let frame = Frame::new(&input, &assets);

        assert_eq!(frame.typed_text(), "abc");
        assert!(frame.jpressed(Key::Enter));
        assert!(frame.pressed(Key::Enter));
        assert!(frame.click());
        assert_eq!(frame.mouse_pos(), Vec2::new(2.0, 3.0));
    }
}
