//! Texture registry
//!
//! An explicit context object built once at startup and passed to the render
//! pass. Image decoding and GPU upload belong to the backend; this only maps
//! names to handles.

use std::collections::HashMap;

use crate::sim::Sprite;

/// Handle to a texture owned by the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ResourceError {
    #[error("texture `{0}` is already registered")]
    Duplicate(String),

    #[error("no texture named `{0}`")]
    Missing(String),
}

/// Name of the full-screen backdrop texture
pub const BACKGROUND: &str = "background";

#[derive(Debug, Clone, Default)]
pub struct ResourceContext {
    textures: HashMap<String, TextureId>,
    next_id: u32,
}

impl ResourceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the backdrop and one texture per sprite kind
    pub fn with_default_textures() -> Result<Self, ResourceError> {
        let mut ctx = Self::new();
        ctx.register(BACKGROUND)?;
        for sprite in [Sprite::Ship, Sprite::Asteroid, Sprite::Bullet, Sprite::Remnant] {
            ctx.register(sprite.name())?;
        }
        Ok(ctx)
    }

    /// Allocate a handle for a new texture name
    pub fn register(&mut self, name: &str) -> Result<TextureId, ResourceError> {
        if self.textures.contains_key(name) {
            return Err(ResourceError::Duplicate(name.to_string()));
        }
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.textures.insert(name.to_string(), id);
        log::debug!("Registered texture `{}` as {:?}", name, id);
        Ok(id)
    }

    pub fn texture(&self, name: &str) -> Result<TextureId, ResourceError> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| ResourceError::Missing(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Textures resolved once at startup so drawing never fails mid-loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteTextures {
    pub background: TextureId,
    pub ship: TextureId,
    pub asteroid: TextureId,
    pub bullet: TextureId,
    pub remnant: TextureId,
}

impl SpriteTextures {
    pub fn resolve(ctx: &ResourceContext) -> Result<Self, ResourceError> {
        Ok(Self {
            background: ctx.texture(BACKGROUND)?,
            ship: ctx.texture(Sprite::Ship.name())?,
            asteroid: ctx.texture(Sprite::Asteroid.name())?,
            bullet: ctx.texture(Sprite::Bullet.name())?,
            remnant: ctx.texture(Sprite::Remnant.name())?,
        })
    }

    pub fn for_sprite(&self, sprite: Sprite) -> TextureId {
        match sprite {
            Sprite::Ship => self.ship,
            Sprite::Asteroid => self.asteroid,
            Sprite::Bullet => self.bullet,
            Sprite::Remnant => self.remnant,
        }
    }
}
