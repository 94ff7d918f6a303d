//! The report export operation
//!
//! One call walks the control through `Rendering -> Delivering -> Done`,
//! or lands on `Error` with a single alert. The control never stays busy
//! once `export_report` returns.

use crate::models::{DeliveryOutcome, ExportConfig, ExportStatus, ShareOutcome};
use crate::report::errors::ExportError;
use crate::report::images::inline_external_images;
use crate::report::platform::{
    CaptureRegion, ImageFetcher, Notifier, Rasterizer, RenderOptions, ReportFile, SharePlatform,
    StatusView,
};

/// Renders a capture region to PNG and delivers it to the user
pub struct ReportExporter<F, R, P, V, N> {
    config: ExportConfig,
    fetcher: F,
    rasterizer: R,
    platform: P,
    view: V,
    notifier: N,
}

impl<F, R, P, V, N> ReportExporter<F, R, P, V, N>
where
    F: ImageFetcher,
    P: SharePlatform,
    V: StatusView,
    N: Notifier,
{
    pub fn new(config: ExportConfig, fetcher: F, rasterizer: R, platform: P, view: V, notifier: N) -> Self {
        Self {
            config,
            fetcher,
            rasterizer,
            platform,
            view,
            notifier,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export `region` as `reporte-<league>.png`
    ///
    /// Hard failures are reported to the user here and come back as
    /// `DeliveryOutcome::Failed`; this never returns an error.
    pub async fn export_report<C>(&self, region: &C) -> DeliveryOutcome
    where
        C: CaptureRegion,
        R: Rasterizer<C>,
    {
        self.view.show(&ExportStatus::Rendering);

        match self.render_and_deliver(region).await {
            Ok(outcome) => {
                log::info!("Report export finished: {:?}", outcome);
                self.view.show(&ExportStatus::Done);
                outcome
            }
            Err(err) => self.fail(err),
        }
    }

    /// Report a hard failure: one alert, control left enabled with the
    /// error label
    pub fn fail(&self, err: ExportError) -> DeliveryOutcome {
        log::error!("Report export failed: {}", err);
        self.notifier.alert(&err.alert_message());
        let message = err.to_string();
        self.view.show(&ExportStatus::Error(message.clone()));
        DeliveryOutcome::Failed(message)
    }

    async fn render_and_deliver<C>(&self, region: &C) -> Result<DeliveryOutcome, ExportError>
    where
        C: CaptureRegion,
        R: Rasterizer<C>,
    {
        // Inlining must settle before the rasterizer reads any source
        let summary = inline_external_images(region, &self.fetcher, &self.config).await;
        log::debug!(
            "Inlined {} images ({} skipped, {} failed)",
            summary.inlined,
            summary.skipped,
            summary.failed
        );

        let bitmap = self.rasterizer.render(region, &RenderOptions::report()).await?;
        self.view.show(&ExportStatus::Delivering);

        let png = self.rasterizer.encode_png(bitmap)?;
        let file = ReportFile::png(self.config.report_filename(), png);
        log::debug!("Encoded {} ({} bytes)", file.filename, file.bytes.len());

        self.deliver(&file).await
    }

    async fn deliver(&self, file: &ReportFile) -> Result<DeliveryOutcome, ExportError> {
        if self.platform.can_share(file) {
            match self.platform.share(file).await {
                ShareOutcome::Shared => return Ok(DeliveryOutcome::Shared),
                ShareOutcome::Cancelled => {
                    log::info!("Share sheet dismissed by the user");
                    return Ok(DeliveryOutcome::ShareCancelled);
                }
                ShareOutcome::Failed(reason) => {
                    log::warn!("Native share failed, falling back to download: {}", reason);
                }
            }
        }

        self.platform.download(file)?;
        Ok(DeliveryOutcome::Downloaded)
    }
}
