use crate::state::Field;

/// Maps playfield pixels onto the window, keeping the aspect ratio and
/// centering the field.
pub struct Camera {
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub screen_w: f32,
    pub screen_h: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Camera {
    pub fn new(field: Field, width: f32, height: f32) -> Self {
        let mut camera = Camera {
            zoom: 1.0,
            min_zoom: 1.0 / 16.0,
            max_zoom: 16.0,
            screen_w: width,
            screen_h: height,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        camera.fit(field);
        camera
    }

    pub fn on_resize(&mut self, field: Field, w: f32, h: f32) {
        self.screen_w = w;
        self.screen_h = h;
        self.fit(field);
    }

    pub fn fit(&mut self, field: Field) {
        self.zoom = self.zoom_to_fit(field);
        self.offset_x = ((self.screen_w - field.w * self.zoom) * 0.5).round();
        self.offset_y = ((self.screen_h - field.h * self.zoom) * 0.5).round();
    }

    pub fn zoom_to_fit(&self, field: Field) -> f32 {
        if field.w <= 0.0 || field.h <= 0.0 {
            return self.max_zoom;
        }
        let desired = (self.screen_w / field.w).min(self.screen_h / field.h);
        desired.clamp(self.min_zoom, self.max_zoom)
    }
}
