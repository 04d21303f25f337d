pub mod compositing {
    pub mod domain {
        pub mod draw_surface;
    }
    pub mod infrastructure {
        pub mod pixmap_surface;
    }
    pub mod circle_mask;
    pub mod circular_image_compositor;
    pub mod scaling;
    pub mod square_crop;
}

pub mod io {
    pub mod domain {
        pub mod image_io_error;
        pub mod image_reader;
        pub mod image_writer;
    }
    pub mod infrastructure {
        pub mod image_file_reader;
        pub mod image_file_writer;
    }
}

pub mod pipeline {
    pub mod render_avatar_use_case;
}

pub mod shared {
    pub mod border;
    pub mod circle_spec;
    pub mod circular_image;
    pub mod color;
    pub mod constants;
    pub mod pixel_format;
    pub mod view_geometry;
}
