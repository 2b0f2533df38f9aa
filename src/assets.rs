//! Sprite loading
//!
//! Each sprite is loaded from disk, scaled to its gameplay size, split into a
//! GPU texture for drawing and a pixel mask for collision. This is the only
//! fallible path in the program; `main` aborts before the loop starts if
//! anything here fails.

use macroquad::color::BLANK;
use macroquad::texture::{Image, Texture2D, load_image};

use crate::consts::*;
use crate::sim::{PixelMask, SpawnMasks};

/// A drawable texture plus the collision mask derived from its alpha channel
pub struct SpriteAsset {
    pub texture: Texture2D,
    pub mask: PixelMask,
}

pub struct Assets {
    pub background: Texture2D,
    pub player: SpriteAsset,
    pub roaming: SpriteAsset,
    pub platform: SpriteAsset,
    pub orb: SpriteAsset,
    pub rotating_orb: SpriteAsset,
    /// Visual overlay only, never collides
    pub shield: Texture2D,
}

impl Assets {
    pub async fn load(dir: &str) -> Result<Self, macroquad::Error> {
        let background = load_scaled(dir, "background.png", FIELD_WIDTH, FIELD_HEIGHT).await?;
        let player = load_sprite(dir, "ghost.png", PLAYER_SIZE).await?;
        let roaming = load_sprite(dir, "spirit.png", ENEMY_SIZE).await?;
        let platform = load_sprite(dir, "wraith.png", ENEMY_SIZE).await?;
        let orb = load_sprite(dir, "orb.png", ORB_SIZE).await?;
        let rotating_orb = load_sprite(dir, "charm.png", ORB_SIZE).await?;
        let shield = load_scaled(dir, "shield.png", SHIELD_SIZE, SHIELD_SIZE).await?;

        Ok(Self {
            background: Texture2D::from_image(&background),
            player,
            roaming,
            platform,
            orb,
            rotating_orb,
            shield: Texture2D::from_image(&shield),
        })
    }

    /// Collision masks handed to the simulation for spawning
    pub fn spawn_masks(&self) -> SpawnMasks {
        SpawnMasks {
            player: self.player.mask.clone(),
            roaming: self.roaming.mask.clone(),
            platform: self.platform.mask.clone(),
            orb: self.orb.mask.clone(),
            rotating_orb: self.rotating_orb.mask.clone(),
        }
    }
}

async fn load_scaled(dir: &str, name: &str, w: i32, h: i32) -> Result<Image, macroquad::Error> {
    let path = format!("{dir}/{name}");
    let image = load_image(&path).await?;
    log::debug!("loaded {path} ({}x{})", image.width, image.height);
    Ok(scale_image(&image, w as u16, h as u16))
}

async fn load_sprite(dir: &str, name: &str, size: i32) -> Result<SpriteAsset, macroquad::Error> {
    let image = load_scaled(dir, name, size, size).await?;
    let mask = PixelMask::from_alpha(image.width as u32, image.height as u32, &image.bytes);
    Ok(SpriteAsset {
        texture: Texture2D::from_image(&image),
        mask,
    })
}

/// Nearest-neighbor resize; keeps hard alpha edges, which is what the mask
/// threshold wants
fn scale_image(src: &Image, w: u16, h: u16) -> Image {
    if src.width == w && src.height == h {
        return src.clone();
    }
    let mut dst = Image::gen_image_color(w, h, BLANK);
    for y in 0..h as u32 {
        for x in 0..w as u32 {
            let sx = x * src.width as u32 / w as u32;
            let sy = y * src.height as u32 / h as u32;
            dst.set_pixel(x, y, src.get_pixel(sx, sy));
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::{Color, WHITE};

    #[test]
    fn scale_image_resamples_to_target_size() {
        let mut src = Image::gen_image_color(4, 4, BLANK);
        // Solid top-left quadrant
        src.set_pixel(0, 0, WHITE);
        src.set_pixel(1, 0, WHITE);
        src.set_pixel(0, 1, WHITE);
        src.set_pixel(1, 1, WHITE);

        let scaled = scale_image(&src, 8, 8);
        assert_eq!((scaled.width, scaled.height), (8, 8));
        assert_eq!(scaled.get_pixel(0, 0), WHITE);
        assert_eq!(scaled.get_pixel(3, 3), WHITE);
        assert_eq!(scaled.get_pixel(7, 7), Color::from_rgba(0, 0, 0, 0));
    }

    #[test]
    fn scaled_image_feeds_the_mask_threshold() {
        let mut src = Image::gen_image_color(2, 2, BLANK);
        src.set_pixel(0, 0, WHITE);

        let scaled = scale_image(&src, 4, 4);
        let mask = PixelMask::from_alpha(4, 4, &scaled.bytes);
        assert!(mask.get(0, 0));
        assert!(mask.get(1, 1));
        assert!(!mask.get(3, 3));
    }
}
