use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use timed_text_core::{
    Cue, FragmentStyle, FragmentStyleBuilder, RegionTable, TextFragment, TextNumber,
    TextSettings, TextSettingsBuilder,
};
use ttml_generator::TtmlGenerator;

const CUE_COUNT: u64 = 3000;

fn sample_body(index: u64, colored: bool) -> TextFragment {
    let mut style = FragmentStyleBuilder::default();
    style.bold(index % 2 == 0);
    if colored {
        style.color("yellow").background_color("black");
    }
    let style = style.build().expect("样式构建失败");

    TextFragment::fragments(
        FragmentStyle::default(),
        vec![
            TextFragment::plain(format!("line {index} & <more>")),
            TextFragment::line_break(),
            TextFragment::text(style, "emphasis"),
        ],
    )
}

fn build_generator(colored: bool) -> TtmlGenerator {
    let mut generator = TtmlGenerator::new();
    generator.initialize(RegionTable::new(), "en", 1000);

    for index in 0..CUE_COUNT {
        let settings = if index % 3 == 0 {
            TextSettingsBuilder::default()
                .line(TextNumber::lines(f64::from(
                    u32::try_from(index % 20).unwrap_or_default(),
                )))
                .build()
                .expect("设置构建失败")
        } else {
            TextSettings::default()
        };
        generator.add_cue(Cue::new(
            "",
            index * 2000,
            index * 2000 + 1500,
            settings,
            sample_body(index, colored),
        ));
    }

    generator
}

fn benchmark_dump(c: &mut Criterion) {
    let mut group = c.benchmark_group("TTML Generation");

    group.measurement_time(Duration::from_secs(20));
    group.sample_size(100);

    let plain = build_generator(false);
    let broadcast = build_generator(true);

    group.bench_function("dump_plain_document", |b| {
        b.iter(|| {
            let document = black_box(&plain).dump().expect("文档生成失败");
            black_box(document);
        });
    });

    group.bench_function("dump_broadcast_document", |b| {
        b.iter(|| {
            let document = black_box(&broadcast).dump().expect("文档生成失败");
            black_box(document);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_dump);

criterion_main!(benches);
