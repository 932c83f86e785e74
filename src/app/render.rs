use super::App;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::tree::layer;
use crate::ui::core::widget::Ui;
use crate::views::ModalRenderer;

impl App {
    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        self.painter.clear();
        self.tree.clear();

        let state = self.store.state();
        {
            let mut ui = Ui::new(area, &mut self.painter, &mut self.tree);
            ui.layer = layer::PAGE;
            self.orders_view.paint(&mut ui, state, &self.theme);
        }
        {
            let mut ui = Ui::new(area, &mut self.painter, &mut self.tree);
            ModalRenderer::new(&self.dialogs, &self.theme).paint(&mut ui, state);
        }

        backend.draw(area, self.painter.cmds());
        backend.set_cursor(None);
        self.dirty = false;
    }
}
