use serde::{Deserialize, Serialize};

/// How the rendered dashboard is rasterized and laid out in the PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Id of the DOM element that gets rasterized.
    pub root_element_id: String,
    pub scale: f64,
    pub background_color: String,
    /// Elements carrying this class are left out of the image.
    pub exclude_class: String,
    pub page: PageFormat,
    pub filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            root_element_id: "dashboard-content".to_string(),
            scale: 2.0,
            background_color: "#0a0a0a".to_string(),
            exclude_class: "no-print".to_string(),
            page: PageFormat::default(),
            filename: "janela-bar-metas.pdf".to_string(),
        }
    }
}

/// Page size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageFormat {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageFormat {
    /// A4 in landscape orientation.
    pub const A4_LANDSCAPE: PageFormat = PageFormat {
        width_mm: 297.0,
        height_mm: 210.0,
    };

    pub fn is_landscape(&self) -> bool {
        self.width_mm >= self.height_mm
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4_LANDSCAPE
    }
}

/// Where the image lands on the page, in page units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fits an image into the page keeping its aspect ratio, centred.
///
/// The image is scaled to the page width first; if that is too tall it is
/// scaled to the page height instead. Degenerate image sizes fill the page.
pub fn fit_to_page(image_width: f64, image_height: f64, page: PageFormat) -> Placement {
    let full_page = Placement {
        x: 0.0,
        y: 0.0,
        width: page.width_mm,
        height: page.height_mm,
    };
    if !(image_width > 0.0 && image_height > 0.0) {
        return full_page;
    }
    let ratio = image_width / image_height;
    if !ratio.is_finite() {
        return full_page;
    }

    let (width, height) = if page.width_mm / ratio > page.height_mm {
        (page.height_mm * ratio, page.height_mm)
    } else {
        (page.width_mm, page.width_mm / ratio)
    };

    Placement {
        x: (page.width_mm - width) / 2.0,
        y: (page.height_mm - height) / 2.0,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: PageFormat = PageFormat::A4_LANDSCAPE;

    #[test]
    fn test_wide_image_fills_width() {
        let p = fit_to_page(2970.0, 1000.0, PAGE);
        assert_eq!(p.width, 297.0);
        assert!((p.height - 100.0).abs() < 1e-9);
        assert_eq!(p.x, 0.0);
        assert!((p.y - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_tall_image_fills_height() {
        let p = fit_to_page(1000.0, 2000.0, PAGE);
        assert_eq!(p.height, 210.0);
        assert_eq!(p.width, 105.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.x, 96.0);
    }

    #[test]
    fn test_same_ratio_fills_page() {
        let p = fit_to_page(594.0, 420.0, PAGE);
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
        assert!((p.width - 297.0).abs() < 1e-9);
        assert!((p.height - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_image_fills_page() {
        for (w, h) in [(0.0, 100.0), (100.0, 0.0), (-1.0, 5.0), (f64::NAN, 1.0)] {
            let p = fit_to_page(w, h, PAGE);
            assert_eq!(p.width, 297.0);
            assert_eq!(p.height, 210.0);
        }
    }

    #[test]
    fn test_default_settings() {
        let s = ExportSettings::default();
        assert_eq!(s.filename, "janela-bar-metas.pdf");
        assert_eq!(s.scale, 2.0);
        assert!(s.page.is_landscape());
    }
}
