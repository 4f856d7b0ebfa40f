use super::prelude::*;
use crate::gateways;

const WRS2_MAX_PATH: u16 = 233;
const WRS2_MAX_ROW: u16 = 248;

pub async fn lookup_pass<G>(gateway: &G, point: GeoPoint) -> Result<PassPrediction>
where
    G: PassInfoGateway + ?Sized,
{
    log::debug!("Looking up next Landsat passes over {point}");
    let prediction = gateway.next_passes(point).await?;
    let PassPrediction { path, row, .. } = prediction;
    if !(1..=WRS2_MAX_PATH).contains(&path) || !(1..=WRS2_MAX_ROW).contains(&row) {
        return Err(gateways::Error::Malformed(format!(
            "WRS-2 path/row {path}/{row} out of range"
        ))
        .into());
    }
    Ok(prediction)
}
