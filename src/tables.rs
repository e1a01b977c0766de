use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{
        bucket::LightingTypeBucket,
        filter::{average_nightly_consumption, efficiency},
        fixture::FixtureRecord,
        schedule::nightly_duration,
        series::{PeriodPoint, Reading},
        totals::Totals,
    },
    quantity::{Zero, energy::KilowattHours},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn reading_cell(reading: Option<Reading>) -> Cell {
    reading
        .map_or_else(
            || Cell::new("n/a").add_attribute(Attribute::Dim),
            |reading| {
                let color = if reading.energy > KilowattHours::ZERO {
                    Color::Reset
                } else {
                    Color::DarkGrey
                };
                Cell::new(format!("{}\n{}", reading.energy, reading.cost)).fg(color)
            },
        )
        .set_alignment(CellAlignment::Right)
}

/// Technical comparison of the lighting types.
#[must_use]
pub fn build_buckets_table(buckets: &[LightingTypeBucket]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Type"),
        Cell::new("Category"),
        Cell::new("Units").set_alignment(CellAlignment::Right),
        Cell::new("Power").set_alignment(CellAlignment::Right),
        Cell::new("Light\noutput").set_alignment(CellAlignment::Right),
        Cell::new("Efficiency").set_alignment(CellAlignment::Right),
        Cell::new("Night").set_alignment(CellAlignment::Right),
        Cell::new("Nightly\nconsumption").set_alignment(CellAlignment::Right),
    ]);
    for bucket in buckets {
        table.add_row(vec![
            Cell::new(bucket.id).add_attribute(Attribute::Dim),
            Cell::new(&bucket.name).add_attribute(Attribute::Bold),
            Cell::new(bucket.category).fg(bucket.category.color()),
            Cell::new(bucket.unit_count).set_alignment(CellAlignment::Right),
            Cell::new(bucket.average_power).set_alignment(CellAlignment::Right),
            Cell::new(bucket.light_output).set_alignment(CellAlignment::Right),
            Cell::new(efficiency(bucket)).set_alignment(CellAlignment::Right),
            Cell::new(bucket.nightly_duration).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2} kWh", average_nightly_consumption(bucket).0))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Projected series, one column per bucket followed by the category subtotals.
#[must_use]
pub fn build_series_table(series: &[PeriodPoint], buckets: &[LightingTypeBucket]) -> Table {
    let Some(first) = series.first() else {
        return new_table();
    };
    let columns = first
        .buckets
        .iter()
        .filter_map(|reading| buckets.iter().find(|bucket| bucket.id == reading.bucket_id))
        .collect_vec();
    let categories = first.categories.keys().copied().collect_vec();

    let mut table = new_table();
    let mut header = vec![Cell::new("Period")];
    header.extend(columns.iter().map(|bucket| {
        Cell::new(&bucket.name).set_alignment(CellAlignment::Right).fg(bucket.category.color())
    }));
    header.extend(categories.iter().map(|category| {
        Cell::new(format!("Σ {category}"))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
    }));
    table.set_header(header);

    for point in series {
        let mut row = vec![Cell::new(&point.label)];
        row.extend(columns.iter().map(|bucket| reading_cell(point.bucket(bucket.id))));
        row.extend(categories.iter().map(|category| {
            reading_cell(point.category(*category)).add_attribute(Attribute::Bold)
        }));
        table.add_row(row);
    }
    table
}

/// Summary cards.
#[must_use]
pub fn build_totals_table(totals: &Totals, buckets: &[LightingTypeBucket]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Total"),
        Cell::new("Energy").set_alignment(CellAlignment::Right),
        Cell::new("Cost").set_alignment(CellAlignment::Right),
    ]);
    for reading in &totals.buckets {
        let name = buckets
            .iter()
            .find(|bucket| bucket.id == reading.bucket_id)
            .map_or_else(|| reading.bucket_id.to_string(), |bucket| bucket.name.clone());
        table.add_row(vec![
            Cell::new(name).fg(reading.category.color()),
            Cell::new(reading.reading.energy).set_alignment(CellAlignment::Right),
            Cell::new(reading.reading.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    for (category, reading) in &totals.categories {
        table.add_row(vec![
            Cell::new(format!("Σ {category}")).add_attribute(Attribute::Bold),
            Cell::new(reading.energy).set_alignment(CellAlignment::Right),
            Cell::new(reading.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    let overall = totals.overall();
    table.add_row(vec![
        Cell::new("Σ").add_attribute(Attribute::Bold),
        Cell::new(overall.energy).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(overall.cost).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Raw fixture records with their unrounded nightly duration.
#[must_use]
pub fn build_fixtures_table(fixtures: &[FixtureRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Technology"),
        Cell::new("Category"),
        Cell::new("Ballast"),
        Cell::new("Power").set_alignment(CellAlignment::Right),
        Cell::new("On"),
        Cell::new("Off"),
        Cell::new("Duration").set_alignment(CellAlignment::Right),
        Cell::new("Location"),
    ]);
    for fixture in fixtures {
        let duration = nightly_duration(fixture.on_time.as_deref(), fixture.off_time.as_deref());
        table.add_row(vec![
            Cell::new(&fixture.id).add_attribute(Attribute::Dim),
            Cell::new(&fixture.technology),
            Cell::new(fixture.category()).fg(fixture.category().color()),
            Cell::new(if fixture.has_ballast { "yes" } else { "no" }),
            fixture
                .power
                .map_or_else(|| Cell::new("n/a").add_attribute(Attribute::Dim), Cell::new)
                .set_alignment(CellAlignment::Right),
            Cell::new(fixture.on_time.as_deref().unwrap_or("n/a")),
            Cell::new(fixture.off_time.as_deref().unwrap_or("n/a")),
            Cell::new(format!("{:.2} h", duration.0)).set_alignment(CellAlignment::Right),
            Cell::new(fixture.location.as_deref().unwrap_or("")),
        ]);
    }
    table
}
