//! Entity tags.
//!
//! Tags categorise entities when their component composition alone isn't
//! enough, e.g. to tell blocking terrain apart from decoration sprites that
//! carry the same components.

use bevy::prelude::*;

/// Terrain that blocks movement.
#[derive(Component, Reflect, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[reflect(Component)]
pub struct BlockTerrainTag;

/// Entity that emits scene music.
#[derive(Component, Reflect, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[reflect(Component)]
pub struct MusicTag;

/// Names a tag kind without carrying the marker itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum TagKind {
    /// See [`BlockTerrainTag`].
    BlockTerrain,
    /// See [`MusicTag`].
    Music,
}

impl TagKind {
    /// Every tag kind, in declaration order.
    pub const ALL: [TagKind; 2] = [TagKind::BlockTerrain, TagKind::Music];

    /// Short label used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::BlockTerrain => "block-terrain",
            Self::Music => "music",
        }
    }

    /// Inserts this kind's marker component on `entity`.
    pub fn attach(self, entity: &mut EntityCommands) {
        match self {
            Self::BlockTerrain => entity.insert(BlockTerrainTag),
            Self::Music => entity.insert(MusicTag),
        };
    }

    /// Whether `entity` carries this kind's marker.
    pub fn is_on(self, entity: EntityRef) -> bool {
        match self {
            Self::BlockTerrain => entity.contains::<BlockTerrainTag>(),
            Self::Music => entity.contains::<MusicTag>(),
        }
    }
}

/// Registers tag components for reflection and logs newly tagged entities.
pub struct TagsPlugin;

impl Plugin for TagsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BlockTerrainTag>()
            .register_type::<MusicTag>()
            .register_type::<TagKind>()
            .add_systems(PostUpdate, log_new_tags);
    }
}

fn log_new_tags(tagged: Query<EntityRef, Or<(Added<BlockTerrainTag>, Added<MusicTag>)>>) {
    if tagged.is_empty() {
        return;
    }
    for kind in TagKind::ALL {
        let count = tagged.iter().filter(|e| kind.is_on(*e)).count();
        if count > 0 {
            debug!("{count} new {} entities", kind.label());
        }
    }
    for entity in &tagged {
        if let Some(name) = entity.get::<Name>()
            && TagKind::Music.is_on(entity)
        {
            info!("Music source: {name}");
        }
    }
}
