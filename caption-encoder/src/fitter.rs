//! Size-constrained re-encoding

use crate::jpeg_encoder::{encode_jpeg, prepare_for_jpeg, JPEG_QUALITY_LADDER};
use crate::png_encoder::{encode_png, PNG_COMPRESSION_LADDER};
use caption_core::{Error, ImageAsset, ImageFormat, Result, SizeBudget};
use std::fmt::Debug;
use tracing::{debug, info, warn};

/// Returns bytes for `asset` that are no larger than `budget`.
///
/// An asset already within budget is returned unchanged. Otherwise the image
/// is decoded (codec detected from content, not the extension) and
/// re-encoded along the declared format's ladder, and the first attempt that
/// fits is returned.
pub fn fit(asset: &ImageAsset, budget: SizeBudget) -> Result<Vec<u8>> {
    if budget.admits(asset.data_size()) {
        info!(size = asset.data_size(), budget = budget.bytes(), "image already within budget");
        return Ok(asset.data().to_vec());
    }

    let format = asset.format();
    let image = image::load_from_memory(asset.data()).map_err(Error::Decode)?;

    debug!(
        ?format,
        width = image.width(),
        height = image.height(),
        size = asset.data_size(),
        "re-encoding oversized image"
    );

    match format {
        ImageFormat::Jpeg => {
            let image = prepare_for_jpeg(image);
            first_fit(&JPEG_QUALITY_LADDER, budget, |&quality| encode_jpeg(&image, quality))
        }
        ImageFormat::Png => first_fit(&PNG_COMPRESSION_LADDER, budget, |&settings| {
            encode_png(&image, settings)
        }),
    }
}

/// Walks `ladder` in order and returns the first encoding within budget
fn first_fit<S, F>(ladder: &[S], budget: SizeBudget, mut encode: F) -> Result<Vec<u8>>
where
    S: Debug,
    F: FnMut(&S) -> Result<Vec<u8>>,
{
    for setting in ladder {
        let encoded = encode(setting)?;
        debug!(?setting, size = encoded.len(), budget = budget.bytes(), "encoding attempt");
        if budget.admits(encoded.len()) {
            return Ok(encoded);
        }
    }

    warn!(budget = budget.bytes(), attempts = ladder.len(), "no encoding fit the budget");
    Err(Error::BudgetExceeded {
        budget: budget.bytes(),
    })
}
