use super::prelude::*;

/// Uploads a raster and asks for its georeference afterwards.
pub async fn ingest_overlay_image<G>(gateway: &G, upload: ImageUpload) -> Result<GeoreferencedImage>
where
    G: ImageIngestGateway + ?Sized,
{
    if upload.bytes.is_empty() {
        return Err(Error::EmptyImage);
    }
    log::debug!("Uploading image '{}'", upload.file_name);
    let image = gateway.process_image(upload).await?;
    if image.is_empty() {
        return Err(Error::EmptyImage);
    }
    let bounds = gateway.overlay_bounds().await?;
    if !bounds.is_valid() {
        return Err(Error::InvalidBounds);
    }
    Ok(GeoreferencedImage { image, bounds })
}
