//! Named numeric metric fields of a track record.

use crate::error::{Result, StatsError};
use std::fmt;
use std::str::FromStr;

/// A named numeric metric carried by every [`Record`](super::Record).
///
/// Metrics are the axes the analytics layer correlates, fits, filters and
/// aggregates over. The set is fixed: every record carries a value for every
/// metric (0.0 when the source had no data), so downstream code never needs
/// null handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// All-time Spotify stream count.
    SpotifyStreams,
    /// Number of Spotify playlists featuring the track.
    SpotifyPlaylistCount,
    /// Combined follower reach of those playlists.
    SpotifyPlaylistReach,
    /// Spotify popularity score (0-100).
    SpotifyPopularity,
    /// YouTube video view count.
    YoutubeViews,
    /// YouTube video like count.
    YoutubeLikes,
    /// Number of TikTok posts using the track.
    TiktokPosts,
    /// Cumulative TikTok like count.
    TiktokLikes,
    /// Cumulative TikTok view count.
    TiktokViews,
    /// Terrestrial radio airplay spins.
    AirplaySpins,
    /// SiriusXM satellite radio spins.
    SiriusxmSpins,
    /// Pandora stream count.
    PandoraStreams,
    /// Shazam recognition count.
    ShazamCounts,
    /// Composite cross-platform track score.
    TrackScore,
}

impl Metric {
    /// All metrics in stable declaration order.
    pub const ALL: [Metric; 14] = [
        Metric::SpotifyStreams,
        Metric::SpotifyPlaylistCount,
        Metric::SpotifyPlaylistReach,
        Metric::SpotifyPopularity,
        Metric::YoutubeViews,
        Metric::YoutubeLikes,
        Metric::TiktokPosts,
        Metric::TiktokLikes,
        Metric::TiktokViews,
        Metric::AirplaySpins,
        Metric::SiriusxmSpins,
        Metric::PandoraStreams,
        Metric::ShazamCounts,
        Metric::TrackScore,
    ];

    /// Stable identifier used for field binding and parsing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::SpotifyStreams => "spotify_streams",
            Metric::SpotifyPlaylistCount => "spotify_playlist_count",
            Metric::SpotifyPlaylistReach => "spotify_playlist_reach",
            Metric::SpotifyPopularity => "spotify_popularity",
            Metric::YoutubeViews => "youtube_views",
            Metric::YoutubeLikes => "youtube_likes",
            Metric::TiktokPosts => "tiktok_posts",
            Metric::TiktokLikes => "tiktok_likes",
            Metric::TiktokViews => "tiktok_views",
            Metric::AirplaySpins => "airplay_spins",
            Metric::SiriusxmSpins => "siriusxm_spins",
            Metric::PandoraStreams => "pandora_streams",
            Metric::ShazamCounts => "shazam_counts",
            Metric::TrackScore => "track_score",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| StatsError::InvalidParameter(format!("unknown metric '{}'", s)))
    }
}
