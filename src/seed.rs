//! Sample data for a fresh database.

use crate::error::AppError;
use crate::model::NewBakedGood;
use crate::store::BakeryStore;

/// (bakery, [(baked good, price)])
const SAMPLE: &[(&str, &[(&str, f64)])] = &[
    ("Delightful donuts", &[("Chocolate dipped donut", 2.75), ("Apple-spice filled donut", 3.5)]),
    ("Incredible crullers", &[("Glazed honey cruller", 3.25), ("Chocolate cruller", 100.0)]),
    ("Brioche and beyond", &[("Brioche loaf", 8.0), ("Pain au chocolat", 4.25), ("Kouign-amann", 5.5)]),
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub bakeries: usize,
    pub baked_goods: usize,
}

/// Insert the sample bakeries and goods. Does nothing when any bakery already exists.
pub async fn seed(store: &dyn BakeryStore) -> Result<SeedReport, AppError> {
    if !store.list_bakeries().await?.is_empty() {
        tracing::info!("bakeries already present, skipping seed");
        return Ok(SeedReport::default());
    }
    let mut report = SeedReport::default();
    for (bakery_name, goods) in SAMPLE {
        let bakery = store.insert_bakery(bakery_name).await?;
        report.bakeries += 1;
        for (name, price) in goods.iter() {
            store
                .insert_baked_good(&NewBakedGood {
                    name: name.to_string(),
                    price: *price,
                    bakery_id: bakery.id,
                })
                .await?;
            report.baked_goods += 1;
        }
    }
    tracing::info!(bakeries = report.bakeries, baked_goods = report.baked_goods, "seeded");
    Ok(report)
}
