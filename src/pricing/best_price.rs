use super::{unit_price, PricingError, PricingResult};
use crate::models::PriceObservation;
use chrono::NaiveDateTime;

/// The cheapest recorded unit price for a product and where it was seen.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPrice {
    pub place: String,
    pub unit_price: f64,
    pub recorded_at: NaiveDateTime,
}

/// Select the observation with the minimum unit price.
///
/// Ties on unit price are broken by earliest `recorded_at`, then by
/// smallest `id`, so the result is deterministic regardless of the
/// ordering of the input.
pub fn best_price(observations: &[PriceObservation]) -> PricingResult<BestPrice> {
    let mut best: Option<(&PriceObservation, f64)> = None;

    for obs in observations {
        let price = unit_price(obs.total_price, obs.units)?;
        best = match best {
            None => Some((obs, price)),
            Some((cur, cur_price)) => {
                let wins = price < cur_price
                    || (price == cur_price
                        && (obs.recorded_at, obs.id) < (cur.recorded_at, cur.id));
                if wins {
                    Some((obs, price))
                } else {
                    Some((cur, cur_price))
                }
            }
        };
    }

    let (obs, price) = best.ok_or(PricingError::EmptyHistory)?;
    Ok(BestPrice {
        place: obs.place.clone(),
        unit_price: price,
        recorded_at: obs.recorded_at,
    })
}
