//! Track record model.
//!
//! A [`Record`] is the typed shape of one input row after the loading layer
//! has parsed it. All numeric metrics are present on every record (defaulted
//! to 0.0), so the statistical engines never deal with missing values.

use super::metric::Metric;
use chrono::NaiveDate;

/// One track, immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Track title.
    pub track: String,
    /// Primary artist name.
    pub artist: String,
    /// Album or single name.
    pub album: String,
    /// International Standard Recording Code.
    pub isrc: String,
    /// Release date of the track.
    pub release_date: NaiveDate,
    /// Whether the track is flagged explicit.
    pub explicit: bool,

    spotify_streams: f64,
    spotify_playlist_count: f64,
    spotify_playlist_reach: f64,
    spotify_popularity: f64,
    youtube_views: f64,
    youtube_likes: f64,
    tiktok_posts: f64,
    tiktok_likes: f64,
    tiktok_views: f64,
    airplay_spins: f64,
    siriusxm_spins: f64,
    pandora_streams: f64,
    shazam_counts: f64,
    track_score: f64,
}

impl Record {
    /// Start building a record. Unset metrics default to 0.0.
    pub fn builder(track: impl Into<String>, artist: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(track, artist)
    }

    /// Value of the given metric.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::SpotifyStreams => self.spotify_streams,
            Metric::SpotifyPlaylistCount => self.spotify_playlist_count,
            Metric::SpotifyPlaylistReach => self.spotify_playlist_reach,
            Metric::SpotifyPopularity => self.spotify_popularity,
            Metric::YoutubeViews => self.youtube_views,
            Metric::YoutubeLikes => self.youtube_likes,
            Metric::TiktokPosts => self.tiktok_posts,
            Metric::TiktokLikes => self.tiktok_likes,
            Metric::TiktokViews => self.tiktok_views,
            Metric::AirplaySpins => self.airplay_spins,
            Metric::SiriusxmSpins => self.siriusxm_spins,
            Metric::PandoraStreams => self.pandora_streams,
            Metric::ShazamCounts => self.shazam_counts,
            Metric::TrackScore => self.track_score,
        }
    }

    /// Track age in fractional years as of the given date.
    ///
    /// Derived on demand, never stored.
    pub fn age_years(&self, as_of: NaiveDate) -> f64 {
        (as_of - self.release_date).num_days() as f64 / 365.0
    }

    /// Release year of the track.
    pub fn release_year(&self) -> i32 {
        use chrono::Datelike;
        self.release_date.year()
    }

    /// Ratio of two metrics, `None` when the denominator is zero.
    ///
    /// An unresolvable ratio is surfaced as `None` rather than defaulted to
    /// 0, which would misrepresent the data.
    pub fn metric_ratio(&self, numerator: Metric, denominator: Metric) -> Option<f64> {
        let den = self.metric(denominator);
        if den == 0.0 {
            None
        } else {
            Some(self.metric(numerator) / den)
        }
    }
}

/// Builder for constructing [`Record`]s.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    track: String,
    artist: String,
    album: String,
    isrc: String,
    release_date: NaiveDate,
    explicit: bool,
    metrics: [f64; Metric::ALL.len()],
}

impl RecordBuilder {
    pub fn new(track: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            artist: artist.into(),
            album: String::new(),
            isrc: String::new(),
            release_date: NaiveDate::default(),
            explicit: false,
            metrics: [0.0; Metric::ALL.len()],
        }
    }

    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn isrc(mut self, isrc: impl Into<String>) -> Self {
        self.isrc = isrc.into();
        self
    }

    pub fn release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = date;
        self
    }

    pub fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = explicit;
        self
    }

    /// Set a metric value. Negative inputs are clamped to 0.0; the metric
    /// set is defined as non-negative.
    pub fn metric(mut self, metric: Metric, value: f64) -> Self {
        self.metrics[metric as usize] = value.max(0.0);
        self
    }

    pub fn build(self) -> Record {
        let m = self.metrics;
        Record {
            spotify_streams: m[Metric::SpotifyStreams as usize],
            spotify_playlist_count: m[Metric::SpotifyPlaylistCount as usize],
            spotify_playlist_reach: m[Metric::SpotifyPlaylistReach as usize],
            spotify_popularity: m[Metric::SpotifyPopularity as usize],
            youtube_views: m[Metric::YoutubeViews as usize],
            youtube_likes: m[Metric::YoutubeLikes as usize],
            tiktok_posts: m[Metric::TiktokPosts as usize],
            tiktok_likes: m[Metric::TiktokLikes as usize],
            tiktok_views: m[Metric::TiktokViews as usize],
            airplay_spins: m[Metric::AirplaySpins as usize],
            siriusxm_spins: m[Metric::SiriusxmSpins as usize],
            pandora_streams: m[Metric::PandoraStreams as usize],
            shazam_counts: m[Metric::ShazamCounts as usize],
            track_score: m[Metric::TrackScore as usize],
            track: self.track,
            artist: self.artist,
            album: self.album,
            isrc: self.isrc,
            release_date: self.release_date,
            explicit: self.explicit,
        }
    }
}

/// Extract one metric as a column across all records.
pub fn metric_column(records: &[Record], metric: Metric) -> Vec<f64> {
    records.iter().map(|r| r.metric(metric)).collect()
}

/// Parse a thousands-separated count string (`"1,234,567"`) to a number.
///
/// Empty or unparseable input normalizes to 0.0, upholding the invariant
/// that every metric is present on every record.
pub fn parse_count(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != ' ').collect();
    cleaned.parse::<f64>().unwrap_or(0.0).max(0.0)
}

/// Coerce a source boolean flag (`"1"`, `"true"`) to a bool.
pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "True" | "TRUE")
}
