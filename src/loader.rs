use std::io;

use crate::url::ResourceUrl;

/// Something that can see named resources, the way a classpath does.
pub trait ResourceLoader {
    /// The first visible location of `name`, if any.
    fn get_resource(&self, name: &str) -> Option<ResourceUrl>;

    /// Every visible location of `name`, in search order.
    fn get_resources(&self, name: &str) -> io::Result<Vec<ResourceUrl>>;
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for &T {
    fn get_resource(&self, name: &str) -> Option<ResourceUrl> {
        (**self).get_resource(name)
    }

    fn get_resources(&self, name: &str) -> io::Result<Vec<ResourceUrl>> {
        (**self).get_resources(name)
    }
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for Box<T> {
    fn get_resource(&self, name: &str) -> Option<ResourceUrl> {
        (**self).get_resource(name)
    }

    fn get_resources(&self, name: &str) -> io::Result<Vec<ResourceUrl>> {
        (**self).get_resources(name)
    }
}
