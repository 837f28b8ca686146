mod mean;


pub use mean::MeanModel;

/// A cluster model represented by a single vector
pub trait Prototype {
    type Vector;

    /// The representative vector
    fn prototype(&self) -> &Self::Vector;

    /// Tag shown next to the vector when the model is rendered
    fn prototype_type(&self) -> &'static str;
}
