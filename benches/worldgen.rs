use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meridian::data::GameConfig;
use meridian::entities::Player;
use meridian::render::{Translator, ViewportId};
use meridian::world::World;

fn bench_generate(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("generate_world", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            World::with_seed(black_box(seed)).ok()
        })
    });
}

fn bench_overworld_diff(c: &mut Criterion) {
    let config = GameConfig::default();
    let spec = config.overworld_spec();
    let size = config.overworld.size();
    let Ok(world) = World::with_seed(12345) else {
        return;
    };
    let player = Player::new(world.origin());
    let Ok(mut translator) = Translator::new(world, player) else {
        return;
    };
    let mut step = 1;

    c.bench_function("overworld_move_and_diff", |b| {
        b.iter(|| {
            if !translator.move_overworld(step, 0) {
                step = -step;
            }
            translator.diff(ViewportId::Overworld, Some(&spec), Some(size))
        })
    });
}

fn bench_minimap_diff(c: &mut Criterion) {
    let config = GameConfig::default();
    let spec = config.minimap_spec();
    let size = config.minimap.size();
    let Ok(world) = World::with_seed(12345) else {
        return;
    };
    let mut player = Player::new(world.origin());
    player.ensure_minimap();
    let Ok(mut translator) = Translator::new(world, player) else {
        return;
    };

    c.bench_function("minimap_full_redraw", |b| {
        b.iter(|| {
            translator.diff(ViewportId::Minimap, None, None);
            translator.diff(ViewportId::Minimap, Some(&spec), Some(size))
        })
    });
}

criterion_group!(benches, bench_generate, bench_overworld_diff, bench_minimap_diff);
criterion_main!(benches);
