pub mod render_plane;
