use super::command::DrawCommand;

/// Draw commands for a single frame, in submission order.
pub struct RenderBuffer {
    commands: Vec<DrawCommand>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::ImageId;
    use crate::renderer::command::Rect;
    use glam::IVec2;

    #[test]
    fn commands_keep_push_order() {
        let mut buf = RenderBuffer::new();
        buf.push(DrawCommand::Clear { width: 10, height: 10 });
        buf.push(DrawCommand::Blit {
            image: ImageId(0),
            src: Rect::new(0, 0, 4, 4),
            dst: IVec2::new(1, 2),
        });
        assert_eq!(buf.len(), 2);
        assert!(matches!(buf.commands()[0], DrawCommand::Clear { .. }));
        assert!(matches!(buf.commands()[1], DrawCommand::Blit { .. }));
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buf = RenderBuffer::new();
        buf.push(DrawCommand::Clear { width: 1, height: 1 });
        buf.clear();
        assert!(buf.is_empty());
    }
}
