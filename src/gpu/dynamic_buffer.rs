//! Vertex buffers that grow with the per-frame draw list.
//!
//! GPU buffers cannot be resized in place, so a write that exceeds the
//! current capacity reallocates at twice the needed size. Buffers never
//! shrink.

use std::marker::PhantomData;

/// Smallest allocation, in bytes.
const MIN_CAPACITY: usize = 64;

/// Capacity in bytes after a write of `needed` bytes into a buffer of
/// `capacity` bytes. Unchanged if the data already fits.
#[must_use]
pub fn grown_capacity(capacity: usize, needed: usize) -> usize {
    if needed <= capacity {
        capacity
    } else {
        (needed * 2).max(capacity + 1024)
    }
}

/// A growable GPU buffer of `T` items.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize,
    count: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Empty buffer with room for `items` items.
    #[must_use]
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        items: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = (std::mem::size_of::<T>() * items).max(MIN_CAPACITY);
        Self {
            buffer: Self::allocate(device, label, capacity, usage),
            capacity,
            count: 0,
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Replace the contents with `data`, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let capacity = grown_capacity(self.capacity, bytes.len());
        let reallocated = capacity != self.capacity;
        if reallocated {
            log::debug!("Growing {} to {capacity} bytes", self.label);
            self.buffer = Self::allocate(device, &self.label, capacity, self.usage);
            self.capacity = capacity;
        }
        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.count = data.len();
        reallocated
    }

    /// The underlying GPU buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of items from the last write.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the last write was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
