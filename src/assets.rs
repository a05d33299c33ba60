use crate::constants::{
    NIGHT_SKY_URL, OLD_PAPER_URL, REVEAL_BG_URL, STATUE_LEFT_URL, STATUE_RIGHT_URL,
};
use fnv::FnvHashMap;
use reveal_core::{RevealError, RevealResult};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    RevealBg,
    StatueLeft,
    StatueRight,
    NightSky,
    OldPaper,
}

impl Asset {
    pub const ALL: [Asset; 5] = [
        Asset::RevealBg,
        Asset::StatueLeft,
        Asset::StatueRight,
        Asset::NightSky,
        Asset::OldPaper,
    ];

    pub fn url(self) -> &'static str {
        match self {
            Asset::RevealBg => REVEAL_BG_URL,
            Asset::StatueLeft => STATUE_LEFT_URL,
            Asset::StatueRight => STATUE_RIGHT_URL,
            Asset::NightSky => NIGHT_SKY_URL,
            Asset::OldPaper => OLD_PAPER_URL,
        }
    }
}

pub enum Slot {
    Pending,
    Decoded(web::ImageBitmap),
    Uploaded,
    Failed,
}

/// Where the loader tasks publish their results. The frame loop drains
/// decoded bitmaps and hands them to the GPU.
pub struct AssetSlots {
    slots: FnvHashMap<Asset, Slot>,
}

impl AssetSlots {
    pub fn new() -> Self {
        Self {
            slots: Asset::ALL.iter().map(|a| (*a, Slot::Pending)).collect(),
        }
    }

    fn publish(&mut self, asset: Asset, result: RevealResult<web::ImageBitmap>) {
        let slot = match result {
            Ok(bitmap) => Slot::Decoded(bitmap),
            Err(e) => {
                log::warn!("[assets] {}", e);
                Slot::Failed
            }
        };
        self.slots.insert(asset, slot);
    }

    /// Bitmaps that finished decoding since the last call.
    pub fn take_decoded(&mut self) -> SmallVec<[(Asset, web::ImageBitmap); 5]> {
        let mut out = SmallVec::new();
        for (asset, slot) in self.slots.iter_mut() {
            if matches!(slot, Slot::Decoded(_)) {
                if let Slot::Decoded(bitmap) = std::mem::replace(slot, Slot::Uploaded) {
                    out.push((*asset, bitmap));
                }
            }
        }
        out
    }

    /// True once no request is still in flight.
    pub fn all_settled(&self) -> bool {
        self.slots.values().all(|s| !matches!(s, Slot::Pending))
    }
}

async fn fetch_bitmap(window: &web::Window, url: &str) -> RevealResult<web::ImageBitmap> {
    let fail = |e: wasm_bindgen::JsValue| RevealError::asset_load(url, format!("{:?}", e));
    let resp = JsFuture::from(window.fetch_with_str(url)).await.map_err(fail)?;
    let resp: web::Response = resp.dyn_into().map_err(fail)?;
    if !resp.ok() {
        return Err(RevealError::asset_load(url, format!("HTTP {}", resp.status())));
    }
    let blob = JsFuture::from(resp.blob().map_err(fail)?).await.map_err(fail)?;
    let blob: web::Blob = blob.dyn_into().map_err(fail)?;
    let bitmap = JsFuture::from(window.create_image_bitmap_with_blob(&blob).map_err(fail)?)
        .await
        .map_err(fail)?;
    bitmap.dyn_into::<web::ImageBitmap>().map_err(fail)
}

/// Start one loader task per asset. Failures are recorded and logged; they
/// never reach the caller.
pub fn spawn_loads(window: &web::Window, slots: &Rc<RefCell<AssetSlots>>) {
    for asset in Asset::ALL {
        let window = window.clone();
        let slots = slots.clone();
        spawn_local(async move {
            let result = fetch_bitmap(&window, asset.url()).await;
            if let Ok(bitmap) = &result {
                log::info!(
                    "[assets] {} {}x{}",
                    asset.url(),
                    bitmap.width(),
                    bitmap.height()
                );
            }
            slots.borrow_mut().publish(asset, result);
        });
    }
}
