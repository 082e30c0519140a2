use egui::Color32;
use std::collections::HashMap;

use crate::model::element::ElementCategory;

#[derive(Clone)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Category name → colour
    pub category_colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut category_colors = HashMap::new();

        category_colors.insert("End".into(), [40, 90, 60, 255]);
        category_colors.insert("Means".into(), [40, 70, 120, 255]);
        category_colors.insert("Way".into(), [90, 60, 120, 255]);
        category_colors.insert("Context".into(), [80, 80, 80, 255]);
        category_colors.insert("Risk".into(), [140, 60, 40, 255]);

        Self {
            ui_scale: 1.0,
            category_colors,
        }
    }
}

impl UiSettings {
    pub fn with_scale(scale: f32) -> Self {
        Self {
            ui_scale: scale.clamp(0.75, 2.0),
            ..Default::default()
        }
    }

    pub fn color(&self, category: ElementCategory) -> Color32 {
        self.category_colors
            .get(category.as_str())
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::GRAY)
    }

    pub fn set_color(&mut self, category: ElementCategory, color: Color32) {
        self.category_colors.insert(
            category.as_str().to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }
}
